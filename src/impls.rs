/**
    This module combines all the boilerplate
    implementations of fmt::Display and fmt::Debug.

    Debug output of types holding secret material names the type and
    its sizes only.
*/

use crate::{
    bip39,
    hdwallet,
    key,
    pipeline,
    util
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Debug for key::PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivKey(..)")
    }
}

/*
    bip39 module impls
*/
impl fmt::Display for bip39::Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl fmt::Debug for bip39::Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
         .field("word_count", &self.word_count())
         .finish()
    }
}

impl fmt::Debug for bip39::Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
         .field("bits", &(self.as_bytes().len() * 8))
         .finish()
    }
}

impl fmt::Debug for bip39::Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/*
    hdwallet module impls
*/
impl fmt::Debug for hdwallet::MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

impl fmt::Display for hdwallet::Xprv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let encoded = self.serialize().map_err(|_| fmt::Error)?;
        write!(f, "{}", encoded)
    }
}

impl fmt::Debug for hdwallet::Xprv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xprv")
         .field("network", &self.network())
         .field("depth", &self.depth)
         .field("parent_fingerprint", &self.parent_fingerprint)
         .field("index", &self.index)
         .finish()
    }
}

/*
    pipeline module impls
*/
impl fmt::Debug for pipeline::MasterKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKeys(..)")
    }
}

impl fmt::Debug for pipeline::Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derivation")
         .field("mnemonic", &self.mnemonic)
         .finish()
    }
}

/*
    util module impls
*/
impl fmt::Display for util::Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Bitcoin => "bitcoin",
            Self::Testnet => "testnet"
        };
        write!(f, "{}", name)
    }
}
