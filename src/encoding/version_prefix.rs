use crate::{
    error::{Error, Result},
    util::Network
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    //One byte version prefixes
        PrivateKeyWIF = 0x80,
        TestNetPrivateKeyWIF = 0xef,

    //Four byte version prefixes
        //BIP-32
        Xprv = 0x0488ADE4,
        Tprv = 0x04358394,

    //No data
        None
}

impl VersionPrefix {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            VersionPrefix::PrivateKeyWIF => vec![0x80],
            VersionPrefix::TestNetPrivateKeyWIF => vec![0xef],
            VersionPrefix::None => vec![],

            //Cases where version bytes is 4 bytes long
            _ => (*self as u32).to_be_bytes().to_vec()
        }
    }

    pub fn from_int(int: u32) -> Result<Self> {
        Ok(match int {
            0x80 => Self::PrivateKeyWIF,
            0xEF => Self::TestNetPrivateKeyWIF,
            0x0488ADE4 => Self::Xprv,
            0x04358394 => Self::Tprv,

            _ => return Err(Error::InvalidVersion(int.to_be_bytes().to_vec()))
        })
    }

    /// WIF version byte for a network.
    pub fn wif(network: Network) -> Self {
        match network {
            Network::Bitcoin => Self::PrivateKeyWIF,
            Network::Testnet => Self::TestNetPrivateKeyWIF
        }
    }

    /// Extended private key version for a network.
    pub fn xprv(network: Network) -> Self {
        match network {
            Network::Bitcoin => Self::Xprv,
            Network::Testnet => Self::Tprv
        }
    }

    /// Network the prefix belongs to, `None` for the empty prefix.
    pub fn network(&self) -> Option<Network> {
        match self {
            Self::PrivateKeyWIF | Self::Xprv => Some(Network::Bitcoin),
            Self::TestNetPrivateKeyWIF | Self::Tprv => Some(Network::Testnet),
            Self::None => None
        }
    }
}
