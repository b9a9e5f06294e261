/*
    This module implements the BIP-39 standard
    for mnemonic phrases.

    entropy -> mnemonic words -> 512 bit seed

    Based on chapter 5 of the bitcoin book. (https://github.com/bitcoinbook/bitcoinbook/)
*/

pub mod lang;
pub mod mnemonic;
pub mod seed;

pub use mnemonic::Mnemonic as Mnemonic;
pub use mnemonic::Entropy as Entropy;
pub use mnemonic::PhraseLength as PhraseLength;
pub use seed::Seed as Seed;
pub use lang::{
    IndexMode,
    Language,
    Wordlist
};
