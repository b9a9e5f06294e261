use crate::{
    bip39::Seed,
    error::{Error, Result},
    hash::{self, DigestProfile},
    key::{PrivKey, KEY_LEN},
    util::{encode_02x, try_into}
};

/// HMAC key for the master node.
pub const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/**
    BIP-32 master node: the left half of HMAC-SHA512("Bitcoin seed", seed)
    is the private key and the right half the chain code.
*/
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MasterKey {
    key: PrivKey,
    chaincode: [u8; 32]
}

impl MasterKey {
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        Self::from_seed_with(seed, DigestProfile::Standard)
    }

    /**
        Derives the master node with the chosen SHA-512 profile.

        Fails with `InvalidKey` when the left half is zero or not below
        the curve order.
    */
    pub fn from_seed_with(seed: &Seed, profile: DigestProfile) -> Result<Self> {
        let mprivkey_bytes: [u8; 64] = hash::hmac_sha512_with(profile, MASTER_HMAC_KEY, seed.as_bytes());
        let key = PrivKey::from_slice(&mprivkey_bytes[..KEY_LEN])
            .map_err(|_| Error::InvalidKey("master secret is not a valid secp256k1 scalar".to_string()))?;

        Ok(Self {
            key,
            chaincode: try_into(&mprivkey_bytes[KEY_LEN..])?
        })
    }

    /// Raw seed entry point. Anything but 64 bytes is rejected.
    pub fn from_seed_bytes(seed: &[u8]) -> Result<Self> {
        Self::from_seed(&Seed::from_slice(seed)?)
    }

    pub fn private_key(&self) -> &PrivKey {
        &self.key
    }

    pub fn key(&self) -> [u8; KEY_LEN] {
        self.key.as_bytes()
    }

    pub fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    pub fn chaincode_hex(&self) -> String {
        encode_02x(&self.chaincode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_02x;

    const SEED_HEX: &str = "2f00201a843bf367ed45fda52ea0d3aba21ee730ad1a93189e67ae0e6faae4bb3a32629b955d1cfcde3becc25f2e39519e1e5d9ee8318c6217b11bcedb9f9683";

    #[test]
    fn bip32_test_vector_1() {
        let seed = decode_02x("000102030405060708090a0b0c0d0e0f").unwrap();
        //TV1 seed is 16 bytes, so go through the HMAC directly
        let digest = hash::hmac_sha512(MASTER_HMAC_KEY, &seed);
        assert_eq!(
            encode_02x(&digest[..32]),
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        assert_eq!(
            encode_02x(&digest[32..]),
            "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
        );
    }

    #[test]
    fn master_from_bip39_seed() {
        let seed = Seed::from_hex("5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4").unwrap();
        let master = MasterKey::from_seed(&seed).unwrap();
        assert_eq!(master.private_key().as_hex(), "1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67");
        assert_eq!(master.chaincode_hex(), "7923408dadd3c7b56eed15567707ae5e5dca089de972e07f3b860450e2a3b70e");
    }

    #[test]
    fn profiles_diverge_on_long_seeds() {
        let seed = Seed::from_hex(SEED_HEX).unwrap();

        let standard = MasterKey::from_seed(&seed).unwrap();
        assert_eq!(standard.private_key().as_hex(), "7c6e53e0e995a2970c6b7ce5ba04c330eabbb8288861397c3274962ab1d25a90");
        assert_eq!(standard.chaincode_hex(), "89a5ff28da6bc9de835287bba88c923e2df9dcf0f45afef57c1b5a201e16f4e0");

        let legacy = MasterKey::from_seed_with(&seed, DigestProfile::LegacyBlockSealing).unwrap();
        assert_eq!(legacy.private_key().as_hex(), "673cb61cbdeb67b8ecce8c44021defa992787c546569327b4328fe809de31ccb");
        assert_eq!(legacy.chaincode_hex(), "6552afdf4bc3a927795fb55a2ac9a7374747be8023329937157a95cae49b200f");
    }

    #[test]
    fn deterministic() {
        let seed = Seed::from_hex(SEED_HEX).unwrap();
        assert_eq!(MasterKey::from_seed(&seed).unwrap(), MasterKey::from_seed(&seed).unwrap());
        assert_eq!(MasterKey::from_seed_bytes(seed.as_bytes()).unwrap(), MasterKey::from_seed(&seed).unwrap());
    }

    #[test]
    fn seed_length_checked() {
        assert!(matches!(MasterKey::from_seed_bytes(&[0u8; 32]), Err(Error::InvalidInputLength { .. })));
        assert!(matches!(MasterKey::from_seed_bytes(&[0u8; 65]), Err(Error::InvalidInputLength { .. })));
    }
}
