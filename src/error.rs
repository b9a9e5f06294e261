/*
    Crate wide error type.

    Every stage of the pipeline returns one of these instead of
    terminating. The caller decides how to present them.
*/

/// Errors produced while hashing, encoding or deriving key material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid input length: expected {expected}, got {got}")]
    InvalidInputLength { expected: String, got: usize },

    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(String),

    #[error("wordlist mismatch: {0}")]
    WordlistMismatch(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Internal invariant violation. Seeing this is a bug.
    #[error("encoding failure: {0}")]
    EncodingFailure(String),

    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("word not found in wordlist: {0}")]
    UnknownWord(String),

    #[error("invalid mnemonic word count: {0}")]
    InvalidWordCount(usize),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("unknown version prefix: {0:02x?}")]
    InvalidVersion(Vec<u8>),

    #[error("entropy source failure: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn length(expected: impl ToString, got: usize) -> Self {
        Error::InvalidInputLength {
            expected: expected.to_string(),
            got,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHexEncoding(e.to_string())
    }
}
