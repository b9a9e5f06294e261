/*
    This module implements the master node of hierarchical
    deterministic wallets under the BIP 32 standard and its
    extended private key serialization.

    Child key derivation is not part of this crate.

    Based on chapter 5 of the bitcoin book. (https://github.com/bitcoinbook/bitcoinbook/)
*/

pub mod master;
pub mod extended_keys;

pub use master::MasterKey;
pub use extended_keys::Xprv;
