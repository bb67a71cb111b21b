//! Error types for tod-core

use crate::question::TaskType;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Unknown sexuality: {0}")]
    UnknownSexuality(String),

    #[error("Unknown task type: {0}")]
    UnknownTaskType(String),

    #[error("Unknown pack type: {0}")]
    UnknownPackType(String),

    /// The `requires_target` flag and the `{targetPlayerName}` placeholder disagree.
    #[error("Template mismatch: requires_target={requires_target} for \"{template}\"")]
    TemplateMismatch {
        template: String,
        requires_target: bool,
    },

    #[error("Template references a target player but none was given")]
    MissingTarget,

    #[error("No {kind} questions available in pack \"{pack}\"")]
    NoQuestionsAvailable { pack: String, kind: TaskType },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
