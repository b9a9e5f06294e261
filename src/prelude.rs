/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_keyseed::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::PrivKey,

    bip39::{
        Entropy,
        IndexMode,
        Language,
        Mnemonic,
        PhraseLength,
        Seed,
        Wordlist
    },

    hdwallet::{
        MasterKey,
        Xprv
    },

    hash::DigestProfile,

    encoding::{
        Base58,
        VersionPrefix
    },

    entropy::{
        EntropySource,
        OsEntropy
    },

    config::DerivationConfig,

    pipeline::{
        Derivation,
        KeyPipeline,
        MasterKeys
    },

    util::{
        encode_02x,
        decode_02x,
        try_into,
        Network
    },

    error::Error

};
