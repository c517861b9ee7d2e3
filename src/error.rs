use std::path::PathBuf;

/// Errors produced while creating or revealing shares.
///
/// Every error is terminal for the operation that produced it; the workflow hands the first one
/// back to its caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dictionary needs to have at least 256 words, it only has {found}")]
    DictionaryTooSmall { found: usize },

    #[error("dictionary word {index} is invalid: {reason}")]
    InvalidDictionary { index: usize, reason: String },

    #[error("minimum of {threshold} shares is invalid for {total} shares")]
    InvalidThreshold { threshold: usize, total: usize },

    #[error("the shares file {0:?} already exists, refusing to overwrite it")]
    DestinationExists(PathBuf),

    #[error("unknown word {word:?} on line {line}")]
    UnknownWord { word: String, line: usize },

    #[error("malformed share token: {0}")]
    MalformedToken(String),

    #[error("secret sharing failed: {0}")]
    SharingMath(String),

    #[error("insufficient or invalid shares: {0}")]
    InsufficientOrInvalidShares(String),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
