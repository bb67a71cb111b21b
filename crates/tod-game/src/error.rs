//! Error types for tod-game

use thiserror::Error;
use tod_core::{PlayerId, TaskType};

/// Round orchestration error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] tod_db::Error),

    #[error("Core error: {0}")]
    Core(#[from] tod_core::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Every attempt drew a targeting question nobody could be targeted for.
    #[error("No suitable {kind} question in pack \"{pack}\" after {attempts} attempts")]
    NoSuitableQuestion {
        pack: String,
        kind: TaskType,
        attempts: u32,
    },

    #[error("Not enough players: {found} of {required}")]
    NotEnoughPlayers { found: usize, required: usize },

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Unknown pack: {0}")]
    UnknownPack(String),

    #[error("Pack is locked: {0}")]
    PackLocked(String),
}

impl Error {
    /// Whether the presentation layer should answer this failure by
    /// returning to player setup.
    pub fn redirects_to_setup(&self) -> bool {
        match self {
            Error::Store(_)
            | Error::Core(_)
            | Error::NoSuitableQuestion { .. }
            | Error::NotEnoughPlayers { .. }
            | Error::PlayerNotFound(_) => true,
            Error::Config(_) | Error::Io(_) | Error::UnknownPack(_) | Error::PackLocked(_) => false,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirects_to_setup() {
        let no_question = Error::NoSuitableQuestion {
            pack: "Entspannt".to_string(),
            kind: TaskType::Dare,
            attempts: 5,
        };
        assert!(no_question.redirects_to_setup());
        assert!(Error::Store(tod_db::Error::NoQuestionsAvailable {
            pack: "Entspannt".to_string(),
            kind: TaskType::Truth,
        })
        .redirects_to_setup());
        assert!(Error::NotEnoughPlayers { found: 1, required: 2 }.redirects_to_setup());

        assert!(!Error::PackLocked("Partyyyy".to_string()).redirects_to_setup());
        assert!(!Error::Config("bad".to_string()).redirects_to_setup());
    }
}
