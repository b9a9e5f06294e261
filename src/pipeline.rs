/*
    End to end derivation.

    entropy -> mnemonic -> seed -> master key -> WIF / xprv

    Every stage is a pure transform of its input and the run's
    configuration. A failure aborts the current run only.
*/

use tracing::debug;

use crate::{
    bip39::{Entropy, Mnemonic, Seed, Wordlist},
    config::DerivationConfig,
    entropy::EntropySource,
    error::Result,
    hdwallet::{MasterKey, Xprv},
    key::PrivKey
};

/// Master key material and its exported encodings.
#[derive(Clone, PartialEq, Eq)]
pub struct MasterKeys {
    pub private_key: PrivKey,
    pub chaincode: [u8; 32],
    pub wif: String,
    pub xprv: String
}

/// Everything produced by a run that started from entropy or a mnemonic.
#[derive(Clone, PartialEq, Eq)]
pub struct Derivation {
    pub mnemonic: Mnemonic,
    pub seed: Seed,
    pub keys: MasterKeys
}

#[derive(Debug, Clone)]
pub struct KeyPipeline {
    config: DerivationConfig
}

impl KeyPipeline {
    pub fn new(config: DerivationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// Draws fresh entropy of the configured size and derives from it.
    pub fn generate<S: EntropySource + ?Sized>(&self, source: &mut S, wordlist: &Wordlist) -> Result<Derivation> {
        self.config.validate()?;
        let entropy = Entropy::generate(self.config.phrase_length, source)?;
        debug!(bits = entropy.as_bytes().len() * 8, "generated entropy");
        self.from_entropy(&entropy, wordlist)
    }

    pub fn from_entropy(&self, entropy: &Entropy, wordlist: &Wordlist) -> Result<Derivation> {
        let mnemonic = Mnemonic::from_entropy(entropy, wordlist)?;
        debug!(words = mnemonic.word_count(), "encoded mnemonic");
        self.from_mnemonic(&mnemonic)
    }

    pub fn from_mnemonic(&self, mnemonic: &Mnemonic) -> Result<Derivation> {
        self.config.validate()?;
        let seed = Seed::derive(
            &mnemonic.phrase(),
            &self.config.passphrase,
            self.config.iterations,
            self.config.digest_profile
        )?;
        debug!(
            iterations = self.config.iterations,
            passphrase = !self.config.passphrase.is_empty(),
            "derived seed"
        );

        let keys = self.from_seed(&seed)?;
        Ok(Derivation {
            mnemonic: mnemonic.clone(),
            seed,
            keys
        })
    }

    pub fn from_seed(&self, seed: &Seed) -> Result<MasterKeys> {
        let master = MasterKey::from_seed_with(seed, self.config.digest_profile)?;
        debug!(profile = ?self.config.digest_profile, "derived master key");

        let wif = master.private_key().export_as_wif(self.config.compressed_wif, self.config.network)?;
        let xprv = Xprv::master(&master, self.config.network).serialize()?;
        debug!(
            network = ?self.config.network,
            compressed = self.config.compressed_wif,
            wif_len = wif.len(),
            xprv_len = xprv.len(),
            "exported master key"
        );

        Ok(MasterKeys {
            private_key: *master.private_key(),
            chaincode: master.chaincode(),
            wif,
            xprv
        })
    }

    /// Seed given as 128 hex characters.
    pub fn from_seed_hex(&self, hex: &str) -> Result<MasterKeys> {
        self.from_seed(&Seed::from_hex(hex)?)
    }
}
