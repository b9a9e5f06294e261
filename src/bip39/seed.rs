use unicode_normalization::UnicodeNormalization;

use crate::{
    error::{Error, Result},
    hash::{self, DigestProfile},
    util
};
use super::mnemonic::Mnemonic;

pub const SEED_LEN: usize = 64;
pub const PBKDF2_ROUNDS: u32 = 2048;
const SALT_PREFIX: &str = "mnemonic";

/**
    The 512 bit BIP-39 seed.

    PBKDF2-HMAC-SHA512 over the NFKD normalised mnemonic text, salted
    with "mnemonic" followed by the NFKD normalised passphrase.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(util::try_into(bytes)?))
    }

    /// 128 hex characters, either case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self(util::decode_02x_exact::<SEED_LEN>(hex)?))
    }

    pub fn from_mnemonic(mnemonic: &Mnemonic, passphrase: &str) -> Result<Self> {
        Self::from_phrase_text(&mnemonic.phrase(), passphrase)
    }

    /// Seed for mnemonic text that has not been checked against a wordlist.
    pub fn from_phrase_text(text: &str, passphrase: &str) -> Result<Self> {
        Self::derive(text, passphrase, PBKDF2_ROUNDS, DigestProfile::Standard)
    }

    pub fn derive(text: &str, passphrase: &str, iterations: u32, profile: DigestProfile) -> Result<Self> {
        let password: String = text.nfkd().collect();
        let salt: String = SALT_PREFIX.chars().chain(passphrase.nfkd()).collect();

        let derived = hash::pbkdf2_hmac_sha512_with(profile, password.as_bytes(), salt.as_bytes(), iterations, SEED_LEN)?;
        let seed = util::try_into::<u8, SEED_LEN>(&derived)
            .map_err(|_| Error::EncodingFailure(format!("kdf returned {} bytes", derived.len())))?;
        Ok(Self(seed))
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        util::encode_02x(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bip39::{Entropy, Language};

    #[test]
    fn trezor_vectors() {
        let list = Language::English.word_list();
        let cases = [
            (
                "00000000000000000000000000000000",
                "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
            ),
            (
                "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
                "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607"
            ),
            (
                "ffffffffffffffffffffffffffffffff",
                "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069"
            ),
            (
                "0000000000000000000000000000000000000000000000000000000000000000",
                "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8"
            ),
            (
                "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
                "64c87cde7e12ecf6704ab95bb1408bef047c22db4cc7491c4271d170a1b213d20b385bc1588d9c7b38f1b39d415665b8a9030c9ec653d75e65f847d8fc1fc440"
            )
        ];

        for (entropy, seed) in cases.iter() {
            let mnemonic = Mnemonic::from_entropy(&Entropy::from_hex(entropy).unwrap(), &list).unwrap();
            assert_eq!(mnemonic.to_seed("TREZOR").unwrap().to_hex(), *seed);
        }
    }

    #[test]
    fn empty_passphrase() {
        let seed = Seed::from_phrase_text(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            ""
        ).unwrap();
        assert_eq!(
            seed.to_hex(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn passphrase_is_normalized() {
        let text = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let composed = Seed::from_phrase_text(text, "caf\u{e9}").unwrap();
        let decomposed = Seed::from_phrase_text(text, "cafe\u{301}").unwrap();
        assert_eq!(composed, decomposed);
        assert_ne!(composed, Seed::from_phrase_text(text, "cafe").unwrap());
    }

    #[test]
    fn hex_parsing() {
        let hex = "2f00201a843bf367ed45fda52ea0d3aba21ee730ad1a93189e67ae0e6faae4bb3a32629b955d1cfcde3becc25f2e39519e1e5d9ee8318c6217b11bcedb9f9683";
        let seed = Seed::from_hex(hex).unwrap();
        assert_eq!(seed.to_hex(), hex);
        assert_eq!(Seed::from_hex(&hex.to_uppercase()).unwrap(), seed);

        assert!(matches!(Seed::from_hex(&hex[..126]), Err(Error::InvalidInputLength { .. })));
        assert!(matches!(Seed::from_hex(&hex.replace('f', "g")), Err(Error::InvalidHexEncoding(_))));
        assert!(matches!(Seed::from_slice(&[0u8; 63]), Err(Error::InvalidInputLength { .. })));
    }

    #[test]
    fn zero_iterations_rejected() {
        assert!(matches!(
            Seed::derive("abandon", "", 0, DigestProfile::Standard),
            Err(Error::InvalidParameter(_))
        ));
    }
}
