/*
    HMAC-SHA512 (RFC 2104) with a 128 byte block.

    Keys longer than a block are hashed first, shorter keys are zero
    padded. For the standard profile the padded key blocks are absorbed
    once up front so repeated MACs under the same key (PBKDF2) only pay
    for the message.
*/

use super::{
    sha512::{Sha512, BLOCK_LEN, DIGEST_LEN},
    DigestProfile
};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// A keyed HMAC-SHA512 instance.
#[derive(Clone)]
pub struct HmacSha512 {
    profile: DigestProfile,
    inner_pad: [u8; BLOCK_LEN],
    outer_pad: [u8; BLOCK_LEN],
    inner: Sha512,
    outer: Sha512
}

impl HmacSha512 {
    pub fn new(key: &[u8]) -> Self {
        Self::with_profile(DigestProfile::Standard, key)
    }

    pub fn with_profile(profile: DigestProfile, key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_LEN];
        if key.len() > BLOCK_LEN {
            block[..DIGEST_LEN].copy_from_slice(&profile.sha512(key));
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut inner_pad = [IPAD; BLOCK_LEN];
        let mut outer_pad = [OPAD; BLOCK_LEN];
        for ((i, o), k) in inner_pad.iter_mut().zip(outer_pad.iter_mut()).zip(block.iter()) {
            *i ^= k;
            *o ^= k;
        }

        let mut inner = Sha512::new();
        inner.update(&inner_pad);
        let mut outer = Sha512::new();
        outer.update(&outer_pad);

        Self { profile, inner_pad, outer_pad, inner, outer }
    }

    /// MAC of `data` under this key.
    pub fn mac(&self, data: &[u8]) -> [u8; DIGEST_LEN] {
        match self.profile {
            DigestProfile::Standard => {
                let mut inner = self.inner.clone();
                inner.update(data);
                let mut outer = self.outer.clone();
                outer.update(&inner.finalize());
                outer.finalize()
            },
            //The legacy digest needs the whole message length up front
            DigestProfile::LegacyBlockSealing => {
                let inner = self.profile.sha512(&[&self.inner_pad[..], data].concat());
                self.profile.sha512(&[&self.outer_pad[..], &inner[..]].concat())
            }
        }
    }
}

/// HMAC-SHA512 of `data` keyed with `key`.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> [u8; DIGEST_LEN] {
    HmacSha512::new(key).mac(data)
}

/// HMAC-SHA512 on the selected digest profile.
pub fn hmac_sha512_with(profile: DigestProfile, key: &[u8], data: &[u8]) -> [u8; DIGEST_LEN] {
    HmacSha512::with_profile(profile, key).mac(data)
}
