//! Error types for tod-content

use thiserror::Error;

/// Content loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    /// The catalog parsed but does not hang together.
    #[error("Inconsistent catalog: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Core(#[from] tod_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
