/*
    Library to derive deterministic Bitcoin key material
    from random input.

        entropy -> BIP-39 mnemonic -> seed -> BIP-32 master key -> WIF / xprv

    The hash primitives (SHA-256, SHA-512, HMAC-SHA512, PBKDF2) are
    implemented here rather than pulled from a hash crate. secp256k1 is
    only used to check that a master secret is a valid scalar.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            most of the general concepts come from here

        - BIP-39 (https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
            and BIP-32 (https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki)
            for the test vectors

        - FIPS 180-4, RFC 2104 and RFC 8018 for the hash constructions
*/

//Outward facing modules
pub mod key;
pub mod bip39;
pub mod hdwallet;
pub mod hash;
pub mod encoding;
pub mod entropy;
pub mod config;
pub mod pipeline;
pub mod prelude;
pub mod util;
pub mod error;

//Modules for internal use
mod impls;

pub use error::{Error, Result};
