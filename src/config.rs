/*
    Settings for a derivation run.
*/

use crate::{
    bip39::{seed::PBKDF2_ROUNDS, PhraseLength},
    error::{Error, Result},
    hash::DigestProfile,
    util::Network
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationConfig {
    /// Selects the WIF version byte and the xprv/tprv version.
    pub network: Network,
    /// Append the compression flag to exported WIF keys.
    pub compressed_wif: bool,
    pub passphrase: String,
    /// Size of newly generated mnemonics.
    pub phrase_length: PhraseLength,
    /// PBKDF2 rounds for the seed. BIP-39 uses 2048.
    pub iterations: u32,
    pub digest_profile: DigestProfile
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            network: Network::Bitcoin,
            compressed_wif: false,
            passphrase: String::new(),
            phrase_length: PhraseLength::TwentyFour,
            iterations: PBKDF2_ROUNDS,
            digest_profile: DigestProfile::Standard
        }
    }
}

impl DerivationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn with_compressed_wif(mut self, compressed: bool) -> Self {
        self.compressed_wif = compressed;
        self
    }

    pub fn with_passphrase<S: Into<String>>(mut self, passphrase: S) -> Self {
        self.passphrase = passphrase.into();
        self
    }

    pub fn with_phrase_length(mut self, length: PhraseLength) -> Self {
        self.phrase_length = length;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Non-standard profiles only reproduce keys from the legacy tool.
    pub fn with_digest_profile(mut self, profile: DigestProfile) -> Self {
        self.digest_profile = profile;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidParameter("iterations must be at least 1".to_string()));
        }
        Ok(())
    }
}
