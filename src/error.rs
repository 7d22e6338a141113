//! Error types for clinscan.

use thiserror::Error;

/// Result type for clinscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for clinscan operations.
///
/// Recognizers almost never fail: a bad rule or an unavailable tagger
/// degrades to fewer entities, not an error. `Error` is reserved for
/// boundary-level usage mistakes and tagger transport failures that the
/// wrapper itself converts back into empty results.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided at an API boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The external statistical tagger failed.
    #[error("Tagger error: {0}")]
    Tagger(String),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a tagger error.
    pub fn tagger(msg: impl Into<String>) -> Self {
        Error::Tagger(msg.into())
    }
}
