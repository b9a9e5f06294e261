/*
    PBKDF2 (RFC 8018) with HMAC-SHA512 as the PRF.
*/

use super::{
    hmac::HmacSha512,
    sha512::DIGEST_LEN,
    DigestProfile
};
use crate::error::{Error, Result};

/**
    Derives `output_len` bytes from `password` and `salt`.

    Block i is U1 ^ U2 ^ ... ^ Uc with U1 = HMAC(P, S || be32(i)) and
    Uj = HMAC(P, Uj-1). Blocks are concatenated and the last one is
    truncated.
*/
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], iterations: u32, output_len: usize) -> Result<Vec<u8>> {
    pbkdf2_hmac_sha512_with(DigestProfile::Standard, password, salt, iterations, output_len)
}

pub fn pbkdf2_hmac_sha512_with(
    profile: DigestProfile,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize
) -> Result<Vec<u8>> {
    if iterations == 0 {
        return Err(Error::InvalidParameter("iteration count must be at least 1".to_string()));
    }
    if output_len == 0 {
        return Err(Error::InvalidParameter("output length must be at least 1".to_string()));
    }
    let blocks = (output_len + DIGEST_LEN - 1) / DIGEST_LEN;
    if (blocks as u64) > u64::from(u32::MAX) {
        return Err(Error::InvalidParameter(format!("output length {} is too long", output_len)));
    }

    let prf = HmacSha512::with_profile(profile, password);
    let mut output: Vec<u8> = Vec::with_capacity(blocks * DIGEST_LEN);
    let mut salted: Vec<u8> = Vec::with_capacity(salt.len() + 4);

    for index in 1..=blocks as u32 {
        salted.clear();
        salted.extend_from_slice(salt);
        salted.extend_from_slice(&index.to_be_bytes());

        let mut u = prf.mac(&salted);
        let mut block = u;
        for _ in 1..iterations {
            u = prf.mac(&u);
            block.iter_mut().zip(u.iter()).for_each(|(b, x)| *b ^= x);
        }
        output.extend_from_slice(&block);
    }

    output.truncate(output_len);
    Ok(output)
}
