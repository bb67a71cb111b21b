//! Questions and task types

use crate::error::{Error, Result};
use crate::identity::QuestionId;
use crate::template::Template;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of task a question poses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Truth,
    Dare,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Truth => "truth",
            TaskType::Dare => "dare",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "truth" => Ok(TaskType::Truth),
            "dare" => Ok(TaskType::Dare),
            other => Err(Error::UnknownTaskType(other.to_string())),
        }
    }
}

/// A question row before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub pack_name: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub text_template: Template,
    pub requires_target: bool,
}

impl NewQuestion {
    pub fn new(
        pack_name: impl Into<String>,
        kind: TaskType,
        text_template: impl Into<Template>,
        requires_target: bool,
    ) -> Self {
        Self {
            pack_name: pack_name.into(),
            kind,
            text_template: text_template.into(),
            requires_target,
        }
    }

    /// Check that `requires_target` holds exactly when the text mentions
    /// `{targetPlayerName}`.
    pub fn validate(&self) -> Result<()> {
        if self.requires_target != self.text_template.needs_target() {
            return Err(Error::TemplateMismatch {
                template: self.text_template.to_string(),
                requires_target: self.requires_target,
            });
        }
        Ok(())
    }

    /// Attach a store-assigned id
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            pack_name: self.pack_name,
            kind: self.kind,
            text_template: self.text_template,
            requires_target: self.requires_target,
        }
    }
}

/// A stored question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub pack_name: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub text_template: Template,
    pub requires_target: bool,
}

impl Question {
    /// Render the question for the acting player and optional target
    pub fn render(&self, player: &str, target: Option<&str>) -> Result<String> {
        self.text_template.render(player, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_parse() {
        assert_eq!("truth".parse::<TaskType>().unwrap(), TaskType::Truth);
        assert_eq!("dare".parse::<TaskType>().unwrap(), TaskType::Dare);
        assert!("Truth".parse::<TaskType>().is_err());
    }

    #[test]
    fn test_validate_target_flag() {
        let ok = NewQuestion::new(
            "Entspannt",
            TaskType::Dare,
            "{playerName}, umarme {targetPlayerName}.",
            true,
        );
        assert!(ok.validate().is_ok());

        let missing = NewQuestion::new("Entspannt", TaskType::Dare, "{playerName}, tanze.", true);
        assert!(matches!(
            missing.validate(),
            Err(Error::TemplateMismatch { .. })
        ));

        let unflagged = NewQuestion::new(
            "Entspannt",
            TaskType::Dare,
            "{playerName}, umarme {targetPlayerName}.",
            false,
        );
        assert!(unflagged.validate().is_err());
    }

    #[test]
    fn test_with_id() {
        let q = NewQuestion::new("Entspannt", TaskType::Truth, "{playerName}?", false)
            .with_id(QuestionId::new(7));
        assert_eq!(q.id, QuestionId::new(7));
        assert_eq!(q.render("Anna", None).unwrap(), "Anna?");
    }
}
