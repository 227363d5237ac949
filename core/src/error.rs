//! Error types for corebench-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid partition count, worker count, ...)
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error (worker thread could not be spawned)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a configuration error from any message
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
