/*
    This module implements the extended private key
    serialization used by BIP32 hierarchal deterministic wallets.

    Serialized layout (82 bytes before Base58):
        version(4) || depth(1) || parent fingerprint(4) || child number(4)
        || chaincode(32) || 0x00 || key(32) || checksum(4)
*/

use std::str::FromStr;

use crate::{
    encoding::{
        base58::{self, Base58},
        version_prefix::VersionPrefix
    },
    error::{Error, Result},
    hash,
    hdwallet::master::MasterKey,
    key::PrivKey,
    util::{
        try_into,
        as_u32_be,
        Network
    }
};

/// Raw record length including the checksum.
pub const XPRV_LEN: usize = 82;
/// Record length without the checksum.
const PAYLOAD_LEN: usize = 78;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Xprv {
    key: PrivKey,
    chaincode: [u8; 32],
    network: Network,
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub index: [u8; 4]
}

impl Xprv {
    /**
        Constructs the Extended Key.
    */
    pub fn construct(key: PrivKey, chaincode: [u8; 32], network: Network, depth: u8, pf: [u8; 4], index: [u8; 4]) -> Self {
        Self {
            key,
            chaincode,
            network,
            //Serialisation info
            depth,
            parent_fingerprint: pf,
            index
        }
    }

    /**
        Master extended key: depth 0, no parent, child 0.
    */
    pub fn master(master: &MasterKey, network: Network) -> Self {
        Self::construct(*master.private_key(), master.chaincode(), network, 0x00, [0x00; 4], [0x00; 4])
    }

    /**
        Returns the key part (left 32 bytes) of the extended key
    */
    pub fn key(&self) -> [u8; 32] {
        self.key.as_bytes()
    }

    /**
        Return the private key part of self
    */
    pub fn get_prv(&self) -> PrivKey {
        self.key
    }

    /**
        Returns the chaincode (right 32 bytes) of the extended key
    */
    pub fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn version(&self) -> VersionPrefix {
        VersionPrefix::xprv(self.network)
    }

    //Everything after the version bytes, before the checksum
    fn payload(&self) -> Vec<u8> {
        let mut payload: Vec<u8> = Vec::with_capacity(PAYLOAD_LEN - 4);
        payload.push(self.depth); //depth
        payload.extend_from_slice(&self.parent_fingerprint); //fingerprint
        payload.extend_from_slice(&self.index); //index
        payload.extend_from_slice(&self.chaincode); //chaincode
        payload.push(0x00); //private key append 0x00
        payload.extend_from_slice(&self.key()); //private key
        payload
    }

    /**
        Serialize the extended key with the version of its network
    */
    pub fn serialize(&self) -> Result<String> {
        let encoded = Base58::new(Some(self.version()), &self.payload()).check_encode()?;
        if encoded.is_empty() {
            return Err(Error::EncodingFailure("empty extended key encoding".to_string()));
        }
        Ok(encoded)
    }

    /**
        The raw 82 byte record, checksum included.
    */
    pub fn to_bytes(&self) -> [u8; XPRV_LEN] {
        let mut bytes = [0u8; XPRV_LEN];
        bytes[..4].copy_from_slice(&self.version().to_bytes());
        bytes[4..PAYLOAD_LEN].copy_from_slice(&self.payload());
        let checksum = hash::checksum(&bytes[..PAYLOAD_LEN]);
        bytes[PAYLOAD_LEN..].copy_from_slice(&checksum);
        bytes
    }
}

impl FromStr for Xprv {
    type Err = Error;

    /**
        Import a extended private key from a string.
        "xprv[...]" or "tprv[...]"
    */
    fn from_str(key: &str) -> Result<Self> {
        let bytes = base58::check_decode(key)?;
        if bytes.len() != PAYLOAD_LEN {
            return Err(Error::length(XPRV_LEN, bytes.len() + 4));
        }

        //Only continue if version is for extended private keys
        let version: u32 = as_u32_be(&try_into(&bytes[0..4])?);
        let network = match VersionPrefix::from_int(version)? {
            VersionPrefix::Xprv => Network::Bitcoin,
            VersionPrefix::Tprv => Network::Testnet,
            _ => return Err(Error::InvalidVersion(bytes[0..4].to_vec()))
        };

        if bytes[45] != 0x00 {
            return Err(Error::InvalidKey(format!("expected 0x00 before the private key, found {:#04x}", bytes[45])));
        }

        //Extract the remaining data from the payload
        let depth: u8 = bytes[4];
        let fingerprint: [u8; 4] = try_into(&bytes[5..9])?;
        let index: [u8; 4] = try_into(&bytes[9..13])?;
        let chaincode: [u8; 32] = try_into(&bytes[13..45])?;
        let key: PrivKey = PrivKey::from_slice(&bytes[46..78])?;

        Ok(Self::construct(key, chaincode, network, depth, fingerprint, index))
    }
}
