//! Error types for database operations.

use thiserror::Error;
use tod_core::TaskType;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The storage location cannot hold a database.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// An add, update or delete did not commit.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Record not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Duplicate key.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The stored schema was written by a newer version.
    #[error("Schema version {found} is newer than supported version {supported}")]
    SchemaTooNew { found: u32, supported: u32 },

    /// No question matches the requested pack and type.
    #[error("No {kind} questions available in pack \"{pack}\"")]
    NoQuestionsAvailable { pack: String, kind: TaskType },

    /// Domain error.
    #[error("Core error: {0}")]
    Core(#[from] tod_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Reclassify a low-level database failure raised inside a write.
    pub(crate) fn into_write_failure(self) -> Self {
        match self {
            Error::Database(msg) => Error::WriteFailed(msg),
            other => other,
        }
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;
