//! Game configuration
//!
//! Tunables for a round of play. Every field has a default, so a RON file
//! only needs to name what it changes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tod_core::DEFAULT_PACK_NAME;

/// Configuration for round orchestration
///
/// # Example
///
/// ```
/// use tod_game::GameConfig;
///
/// let config = GameConfig::from_ron_str("(max_question_attempts: 3, seed: Some(7))").unwrap();
/// assert_eq!(config.max_question_attempts, 3);
/// assert_eq!(config.question_history, 10);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Questions drawn before a task request gives up
    ///
    /// Only targeting questions without an eligible target use up attempts.
    pub max_question_attempts: u32,

    /// Recently asked question ids to avoid
    pub question_history: usize,

    /// Recently targeted player ids to avoid
    pub target_history: usize,

    /// Pack selected when a game starts
    pub default_pack: String,

    /// Players required before a round can start
    pub min_players: usize,

    /// RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_question_attempts: 5,
            question_history: 10,
            target_history: 3,
            default_pack: DEFAULT_PACK_NAME.to_string(),
            min_players: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a RON configuration
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let config: GameConfig =
            ron::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a RON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&source)
    }

    pub fn with_max_question_attempts(mut self, attempts: u32) -> Self {
        self.max_question_attempts = attempts;
        self
    }

    pub fn with_question_history(mut self, len: usize) -> Self {
        self.question_history = len;
        self
    }

    pub fn with_target_history(mut self, len: usize) -> Self {
        self.target_history = len;
        self
    }

    pub fn with_default_pack(mut self, pack: impl Into<String>) -> Self {
        self.default_pack = pack.into();
        self
    }

    pub fn with_min_players(mut self, n: usize) -> Self {
        self.min_players = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject settings a round cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.max_question_attempts == 0 {
            return Err(Error::Config(
                "max_question_attempts must be at least 1".to_string(),
            ));
        }
        if self.min_players == 0 {
            return Err(Error::Config("min_players must be at least 1".to_string()));
        }
        if self.default_pack.is_empty() {
            return Err(Error::Config("default_pack must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_question_attempts, 5);
        assert_eq!(config.question_history, 10);
        assert_eq!(config.target_history, 3);
        assert_eq!(config.default_pack, "Entspannt");
        assert_eq!(config.min_players, 2);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ron() {
        let config =
            GameConfig::from_ron_str("(target_history: 0, default_pack: \"Partyyyy\")").unwrap();
        assert_eq!(config.target_history, 0);
        assert_eq!(config.default_pack, "Partyyyy");
        assert_eq!(config.max_question_attempts, 5);
    }

    #[test]
    fn test_empty_ron_is_default() {
        assert_eq!(GameConfig::from_ron_str("()").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_invalid_ron() {
        for source in [
            "(max_question_attempts: \"five\")",
            "(max_question_attempts: 0)",
            "(min_players: 0)",
        ] {
            assert!(matches!(
                GameConfig::from_ron_str(source),
                Err(Error::Config(_))
            ));
        }
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_max_question_attempts(2)
            .with_question_history(4)
            .with_target_history(1)
            .with_default_pack("Tiefgründig")
            .with_min_players(3)
            .with_seed(42);
        assert_eq!(config.max_question_attempts, 2);
        assert_eq!(config.question_history, 4);
        assert_eq!(config.target_history, 1);
        assert_eq!(config.default_pack, "Tiefgründig");
        assert_eq!(config.min_players, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"(seed: Some(99), min_players: 3)").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.min_players, 3);

        assert!(matches!(GameConfig::load("/nonexistent/tod.ron"), Err(Error::Io(_))));
    }
}
