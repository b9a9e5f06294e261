use secp256k1::SecretKey;

use crate::{
    encoding::{
        base58::{self, Base58},
        version_prefix::VersionPrefix
    },
    entropy::{EntropySource, OsEntropy},
    error::{Error, Result},
    util::{encode_02x, try_into, Network}
};

pub const KEY_LEN: usize = 32;

/// Trailing WIF byte marking a key whose public key is used compressed.
const COMPRESSION_FLAG: u8 = 0x01;

/// Draws from an entropy source before giving up on finding a valid scalar.
const MAX_KEY_ATTEMPTS: usize = 128;

/**
    A secp256k1 private key.

    Construction checks the scalar is in [1, n-1].
*/
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivKey(SecretKey);

impl PrivKey {
    /**
        Generates a random key from OS entropy. Candidates outside the
        curve order are discarded.
    */
    pub fn new_rand() -> Result<Self> {
        Self::generate(&mut OsEntropy)
    }

    pub fn generate<S: EntropySource + ?Sized>(source: &mut S) -> Result<Self> {
        let mut candidate = [0u8; KEY_LEN];
        for _ in 0..MAX_KEY_ATTEMPTS {
            source.fill_bytes(&mut candidate)?;
            if let Ok(key) = Self::from_slice(&candidate) {
                return Ok(key);
            }
        }
        Err(Error::Entropy(format!("no valid secp256k1 scalar after {} draws", MAX_KEY_ATTEMPTS)))
    }

    /**
        Use a predefined byte array as a secret key.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self> {
        if byte_array.len() != KEY_LEN {
            return Err(Error::length(KEY_LEN, byte_array.len()));
        }
        SecretKey::from_slice(byte_array)
            .map(Self)
            .map_err(|_| Error::InvalidKey("scalar is zero or not below the curve order".to_string()))
    }

    /**
        Serializes the private key into a array of bytes.
    */
    pub fn as_bytes(&self) -> [u8; KEY_LEN] {
        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&self.0[..]);
        bytes
    }

    pub fn as_hex(&self) -> String {
        encode_02x(&self.as_bytes())
    }

    /*
        Export the private key a wallet-import-format (Base58Check Encoded with prefix)
        * Use the parameter to indicate if WIF should include the compression byte.
    */
    pub fn export_as_wif(&self, compressed: bool, network: Network) -> Result<String> {
        let mut key: Vec<u8> = self.as_bytes().to_vec();
        if compressed {
            key.push(COMPRESSION_FLAG);
        }

        let wif = Base58::new(Some(VersionPrefix::wif(network)), &key).check_encode()?;
        if wif.is_empty() {
            return Err(Error::EncodingFailure("empty WIF encoding".to_string()));
        }
        Ok(wif)
    }

    /**
        Imports a WIF string.

        Returns the key, the network its version byte belongs to and
        whether the compression flag was present.
    */
    pub fn from_wif(wif: &str) -> Result<(Self, Network, bool)> {
        let bytes = base58::check_decode(wif)?;
        let compressed = match bytes.len() {
            33 => false,
            34 if bytes[33] == COMPRESSION_FLAG => true,
            34 => return Err(Error::InvalidKey(format!("bad compression flag {:#04x}", bytes[33]))),
            n => return Err(Error::length("33 or 34 bytes", n))
        };

        let network = match VersionPrefix::from_int(bytes[0] as u32)? {
            VersionPrefix::PrivateKeyWIF => Network::Bitcoin,
            VersionPrefix::TestNetPrivateKeyWIF => Network::Testnet,
            _ => return Err(Error::InvalidVersion(vec![bytes[0]]))
        };

        let key: [u8; KEY_LEN] = try_into(&bytes[1..33])?;
        Ok((Self::from_slice(&key)?, network, compressed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_02x;

    const TV1_KEY: &str = "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35";

    fn tv1() -> PrivKey {
        PrivKey::from_slice(&decode_02x(TV1_KEY).unwrap()).unwrap()
    }

    #[test]
    fn wif_export() {
        let key = tv1();
        assert_eq!(key.export_as_wif(false, Network::Bitcoin).unwrap(), "5KasyVKwgbH5VmDomdJdevZXRMMrbWcePkW17vxeg8daJWoeqHQ");
        assert_eq!(key.export_as_wif(true, Network::Bitcoin).unwrap(), "L52XzL2cMkHxqxBXRyEpnPQZGUs3uKiL3R11XbAdHigRzDozKZeW");
        assert_eq!(key.export_as_wif(false, Network::Testnet).unwrap(), "93MWZE9VGpMDTpj6PyCYXX7V51iZkg9qjhMxCZKA1sNd5Zat7w2");
        assert_eq!(key.export_as_wif(true, Network::Testnet).unwrap(), "cVPXTF2TnozE1PenpP3x9huctiATZmp27T9Ue1d8nqLSExoPwfN5");
    }

    #[test]
    fn wif_import() {
        let (key, network, compressed) = PrivKey::from_wif("L52XzL2cMkHxqxBXRyEpnPQZGUs3uKiL3R11XbAdHigRzDozKZeW").unwrap();
        assert_eq!(key.as_hex(), TV1_KEY);
        assert_eq!(network, Network::Bitcoin);
        assert!(compressed);

        let (key, network, compressed) = PrivKey::from_wif("93MWZE9VGpMDTpj6PyCYXX7V51iZkg9qjhMxCZKA1sNd5Zat7w2").unwrap();
        assert_eq!(key, tv1());
        assert_eq!(network, Network::Testnet);
        assert!(!compressed);
    }

    #[test]
    fn wif_import_errors() {
        //Last character changed
        assert_eq!(
            PrivKey::from_wif("5KasyVKwgbH5VmDomdJdevZXRMMrbWcePkW17vxeg8daJWoeqHR"),
            Err(Error::ChecksumMismatch)
        );

        //Valid Base58Check, wrong version byte
        let mut payload = vec![0x05];
        payload.extend_from_slice(&tv1().as_bytes());
        let wrong_version = base58::check_encode(&payload).unwrap();
        assert!(matches!(PrivKey::from_wif(&wrong_version), Err(Error::InvalidVersion(_))));

        //Bad compression flag
        let mut payload = vec![0x80];
        payload.extend_from_slice(&tv1().as_bytes());
        payload.push(0x02);
        let bad_flag = base58::check_encode(&payload).unwrap();
        assert!(matches!(PrivKey::from_wif(&bad_flag), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn invalid_scalars() {
        assert!(matches!(PrivKey::from_slice(&[0u8; 32]), Err(Error::InvalidKey(_))));
        assert!(matches!(PrivKey::from_slice(&[0xff; 32]), Err(Error::InvalidKey(_))));
        assert!(matches!(PrivKey::from_slice(&[1u8; 31]), Err(Error::InvalidInputLength { .. })));
    }

    #[test]
    fn random_keys() {
        let a = PrivKey::new_rand().unwrap();
        let b = PrivKey::new_rand().unwrap();
        assert_ne!(a, b);
        let wif = a.export_as_wif(true, Network::Bitcoin).unwrap();
        assert_eq!(PrivKey::from_wif(&wif).unwrap().0, a);
    }

    //Yields `invalid` scalars first, then a valid key
    struct Scripted {
        invalid: usize,
        draws: usize
    }

    impl EntropySource for Scripted {
        fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
            let byte = if self.draws < self.invalid { 0x00 } else { 0x01 };
            buf.iter_mut().for_each(|b| *b = byte);
            self.draws += 1;
            Ok(())
        }
    }

    #[test]
    fn generate_retries_invalid_scalars() {
        let mut source = Scripted { invalid: 3, draws: 0 };
        let key = PrivKey::generate(&mut source).unwrap();
        assert_eq!(key.as_bytes(), [0x01; KEY_LEN]);
        assert_eq!(source.draws, 4);
    }

    #[test]
    fn generate_gives_up_on_a_stuck_source() {
        let mut source = Scripted { invalid: usize::MAX, draws: 0 };
        assert!(matches!(PrivKey::generate(&mut source), Err(Error::Entropy(_))));
        assert_eq!(source.draws, MAX_KEY_ATTEMPTS);
    }
}
