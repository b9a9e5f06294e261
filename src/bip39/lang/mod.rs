/*
    Wordlists.

    A wordlist is an ordered list of words supplied from outside (a file
    with one word per line, or the bundled English list). Standard
    BIP-39 needs exactly 2048 entries; the modulo mode exists only for
    callers that deliberately want to index a list of another size.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path
};

use tracing::debug;

use crate::error::{Error, Result};

/// Number of words in a BIP-39 wordlist (one per 11-bit index).
pub const WORDLIST_LEN: usize = 2048;

const ENGLISH: &str = include_str!("../../../wordlists/english.txt");

pub enum Language {
    English
}

impl Language {
    pub fn word_list(&self) -> Wordlist {
        match self {
            Language::English => Wordlist::parse(ENGLISH)
        }
    }
}

/// How 11-bit indices select words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// Exactly 2048 words, indexed directly.
    Strict,
    /// Any non-empty list, indexed by `index % len`. Not BIP-39 compliant.
    Modulo
}

impl Default for IndexMode {
    fn default() -> Self {
        IndexMode::Strict
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    mode: IndexMode
}

impl Wordlist {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            mode: IndexMode::Strict
        }
    }

    /// One word per line. Surrounding whitespace and blank lines are ignored.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines().map(str::trim).filter(|w| !w.is_empty()))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words: Vec<String> = Vec::with_capacity(WORDLIST_LEN);
        for line in reader.lines() {
            let line = line.map_err(|e| Error::WordlistMismatch(format!("unreadable wordlist: {}", e)))?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(Self::from_words(words))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::WordlistMismatch(format!("cannot open {}: {}", path.display(), e)))?;
        let list = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), words = list.len(), "loaded wordlist");
        Ok(list)
    }

    /// Switches the lookup mode.
    pub fn with_mode(mut self, mode: IndexMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Checks the list can be indexed in its current mode.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            IndexMode::Strict if self.words.len() != WORDLIST_LEN => Err(Error::WordlistMismatch(
                format!("expected {} words, found {}", WORDLIST_LEN, self.words.len())
            )),
            IndexMode::Modulo if self.words.is_empty() => {
                Err(Error::WordlistMismatch("wordlist is empty".to_string()))
            },
            _ => Ok(())
        }
    }

    /// Word for an 11-bit index.
    pub fn word(&self, index: u16) -> Result<&str> {
        self.validate()?;
        let index = index as usize;
        let word = match self.mode {
            IndexMode::Strict => self.words.get(index),
            IndexMode::Modulo => self.words.get(index % self.words.len())
        };
        word.map(String::as_str)
            .ok_or_else(|| Error::InvalidParameter(format!("word index {} out of range", index)))
    }

    /// Position of a word in the list.
    pub fn index_of(&self, word: &str) -> Result<u16> {
        if self.words.len() != WORDLIST_LEN {
            return Err(Error::WordlistMismatch(
                format!("reverse lookup needs {} words, found {}", WORDLIST_LEN, self.words.len())
            ));
        }
        self.words
            .iter()
            .position(|w| w == word)
            .map(|i| i as u16)
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }
}
