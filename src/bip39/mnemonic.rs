use unicode_normalization::UnicodeNormalization;

use crate::{
    entropy::{EntropySource, OsEntropy},
    error::{Error, Result},
    hash,
    util
};
use super::{
    lang::Wordlist,
    seed::Seed
};

/// Bits per word index.
const BITS_PER_WORD: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseLength {
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour
}

impl PhraseLength {
    pub fn entropy_bits(&self) -> usize {
        match self {
            PhraseLength::Twelve => 128,
            PhraseLength::Fifteen => 160,
            PhraseLength::Eighteen => 192,
            PhraseLength::TwentyOne => 224,
            PhraseLength::TwentyFour => 256
        }
    }

    pub fn entropy_bytes(&self) -> usize {
        self.entropy_bits() / 8
    }

    /// One checksum bit per 32 bits of entropy.
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn word_count(&self) -> usize {
        (self.entropy_bits() + self.checksum_bits()) / BITS_PER_WORD
    }

    /**
        Picks the phrase length for an entropy size given in bits.
        Accepts 128 to 256 in steps of 32.
    */
    pub fn from_entropy_bits(bits: usize) -> Result<Self> {
        Ok(match bits {
            128 => PhraseLength::Twelve,
            160 => PhraseLength::Fifteen,
            192 => PhraseLength::Eighteen,
            224 => PhraseLength::TwentyOne,
            256 => PhraseLength::TwentyFour,
            _ => return Err(Error::length("128, 160, 192, 224 or 256 bits of entropy", bits))
        })
    }

    pub fn from_entropy_len(bytes: usize) -> Result<Self> {
        Self::from_entropy_bits(bytes * 8).map_err(|_| Error::length("16, 20, 24, 28 or 32 bytes of entropy", bytes))
    }

    pub fn from_word_count(words: usize) -> Result<Self> {
        Ok(match words {
            12 => PhraseLength::Twelve,
            15 => PhraseLength::Fifteen,
            18 => PhraseLength::Eighteen,
            21 => PhraseLength::TwentyOne,
            24 => PhraseLength::TwentyFour,
            _ => return Err(Error::InvalidWordCount(words))
        })
    }
}

impl Default for PhraseLength {
    fn default() -> Self {
        PhraseLength::TwentyFour
    }
}

/**
    Initial entropy for a mnemonic.

    Always one of the five BIP-39 sizes. The bytes never show up in
    `Debug` output.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct Entropy {
    bytes: Vec<u8>,
    length: PhraseLength
}

impl Entropy {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let length = PhraseLength::from_entropy_len(bytes.len())?;
        Ok(Self { bytes: bytes.to_vec(), length })
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_slice(&util::decode_02x(hex)?)
    }

    /// Draws fresh entropy of the given size from `source`.
    pub fn generate<S: EntropySource + ?Sized>(length: PhraseLength, source: &mut S) -> Result<Self> {
        let mut bytes: Vec<u8> = vec![0; length.entropy_bytes()];
        source.fill_bytes(&mut bytes)?;
        Ok(Self { bytes, length })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn phrase_length(&self) -> PhraseLength {
        self.length
    }

    /// Leading `bits / 32` bits of SHA-256(entropy), right aligned.
    pub fn checksum(&self) -> u8 {
        hash::sha256(&self.bytes)[0] >> (8 - self.length.checksum_bits())
    }
}

/**
    A BIP-39 mnemonic phrase.

    The word indices are kept alongside the words so the entropy can be
    recovered even when the words came from a modulo-indexed list.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<String>,
    indices: Vec<u16>,
    length: PhraseLength
}

impl Mnemonic {
    /// Random mnemonic of the given length, using OS entropy.
    pub fn new(length: PhraseLength, wordlist: &Wordlist) -> Result<Self> {
        Self::generate(length, &mut OsEntropy, wordlist)
    }

    pub fn generate<S: EntropySource + ?Sized>(length: PhraseLength, source: &mut S, wordlist: &Wordlist) -> Result<Self> {
        let entropy = Entropy::generate(length, source)?;
        Self::from_entropy(&entropy, wordlist)
    }

    /**
        Encodes entropy as words.

        The entropy is extended with its checksum and split into 11 bit
        big-endian groups, each group selecting one word.
    */
    pub fn from_entropy(entropy: &Entropy, wordlist: &Wordlist) -> Result<Self> {
        wordlist.validate()?;
        let length = entropy.phrase_length();

        //The checksum is at most 8 bits so it always fits in the first hash byte
        let mut bits: Vec<u8> = Vec::with_capacity(length.entropy_bytes() + 1);
        bits.extend_from_slice(entropy.as_bytes());
        bits.push(hash::sha256(entropy.as_bytes())[0]);

        let indices: Vec<u16> = (0..length.word_count()).map(|i| read_group(&bits, i)).collect();
        let words = indices
            .iter()
            .map(|&index| wordlist.word(index).map(str::to_string))
            .collect::<Result<Vec<String>>>()?;

        Ok(Self { words, indices, length })
    }

    /**
        Parses a phrase against a standard 2048 word list.

        The phrase is NFKD normalised and split on whitespace. The word
        count, every word and the checksum are validated.
    */
    pub fn from_phrase(phrase: &str, wordlist: &Wordlist) -> Result<Self> {
        let normalized: String = phrase.nfkd().collect();
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let length = PhraseLength::from_word_count(tokens.len())?;

        let indices = tokens
            .iter()
            .map(|word| wordlist.index_of(word))
            .collect::<Result<Vec<u16>>>()?;

        let mut bits: Vec<u8> = vec![0; length.entropy_bytes() + 1];
        for (i, &index) in indices.iter().enumerate() {
            write_group(&mut bits, i, index);
        }

        let entropy = Entropy::from_slice(&bits[..length.entropy_bytes()])?;
        let found = bits[length.entropy_bytes()] >> (8 - length.checksum_bits());
        if found != entropy.checksum() {
            return Err(Error::ChecksumMismatch);
        }

        Ok(Self {
            words: tokens.into_iter().map(str::to_string).collect(),
            indices,
            length
        })
    }

    /// Recovers the entropy the phrase encodes.
    pub fn to_entropy(&self) -> Result<Entropy> {
        let mut bits: Vec<u8> = vec![0; self.length.entropy_bytes() + 1];
        for (i, &index) in self.indices.iter().enumerate() {
            write_group(&mut bits, i, index);
        }
        Entropy::from_slice(&bits[..self.length.entropy_bytes()])
    }

    /// Words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_length(&self) -> PhraseLength {
        self.length
    }

    pub fn to_seed(&self, passphrase: &str) -> Result<Seed> {
        Seed::from_mnemonic(self, passphrase)
    }
}

//Reads the i-th 11 bit group, most significant bit first
fn read_group(bits: &[u8], group: usize) -> u16 {
    let start = group * BITS_PER_WORD;
    (start..start + BITS_PER_WORD).fold(0u16, |acc, bit| {
        let set = (bits[bit / 8] >> (7 - bit % 8)) & 1;
        (acc << 1) | set as u16
    })
}

fn write_group(bits: &mut [u8], group: usize, index: u16) {
    let start = group * BITS_PER_WORD;
    for offset in 0..BITS_PER_WORD {
        if (index >> (BITS_PER_WORD - 1 - offset)) & 1 == 1 {
            let bit = start + offset;
            bits[bit / 8] |= 1 << (7 - bit % 8);
        }
    }
}
