/*
    Hash module.

    The single home of every digest the crate uses: SHA-256 for
    checksums, SHA-512 / HMAC-SHA512 for BIP-32 and PBKDF2-HMAC-SHA512
    for BIP-39 seeds. Everything above this layer goes through the
    functions re-exported here.
*/

mod sha256;
mod sha512;
mod hmac;
mod pbkdf2;

pub use self::sha256::{sha256, Sha256};
pub use self::sha512::{sha512, sha512_block_sealed, Sha512};
pub use self::hmac::{hmac_sha512, hmac_sha512_with, HmacSha512};
pub use self::pbkdf2::{pbkdf2_hmac_sha512, pbkdf2_hmac_sha512_with};

pub const SHA256_LEN: usize = sha256::DIGEST_LEN;
pub const SHA512_LEN: usize = sha512::DIGEST_LEN;
pub const SHA512_BLOCK_LEN: usize = sha512::BLOCK_LEN;

/// Selects which SHA-512 the keyed constructions run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestProfile {
    /// FIPS 180-4 SHA-512. Required for BIP-32/BIP-39 interoperability.
    Standard,
    /// The block sealing SHA-512 of the legacy seed tool (see
    /// [`sha512_block_sealed`]). Only for re-deriving keys that tool produced.
    LegacyBlockSealing
}

impl DigestProfile {
    pub fn sha512(self, input: &[u8]) -> [u8; SHA512_LEN] {
        match self {
            DigestProfile::Standard => sha512(input),
            DigestProfile::LegacyBlockSealing => sha512_block_sealed(input)
        }
    }
}

impl Default for DigestProfile {
    fn default() -> Self {
        DigestProfile::Standard
    }
}

/*
    Takes in a byte array and returns the double sha256 hash of it
*/
pub fn sha256d<T>(input: T) -> [u8; SHA256_LEN]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/*
    First four bytes of sha256d, the Base58Check checksum
*/
pub fn checksum(input: &[u8]) -> [u8; 4] {
    let digest = sha256d(input);
    [digest[0], digest[1], digest[2], digest[3]]
}
