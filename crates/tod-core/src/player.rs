//! Players and their declared gender and sexuality

use crate::error::{Error, Result};
use crate::identity::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared gender of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Diverse,
}

impl Gender {
    /// All genders, in display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Diverse];

    /// Canonical name used for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Diverse => "Diverse",
        }
    }

    /// Whether this is one of the two binary genders
    pub fn is_binary(&self) -> bool {
        matches!(self, Gender::Male | Gender::Female)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Diverse" => Ok(Gender::Diverse),
            other => Err(Error::UnknownGender(other.to_string())),
        }
    }
}

/// Declared sexuality of a player, which drives target eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sexuality {
    Hetero,
    Homo,
    Bi,
    Pan,
    Ace,
}

impl Sexuality {
    /// All sexualities, in display order
    pub const ALL: [Sexuality; 5] = [
        Sexuality::Hetero,
        Sexuality::Homo,
        Sexuality::Bi,
        Sexuality::Pan,
        Sexuality::Ace,
    ];

    /// Canonical name used for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Sexuality::Hetero => "Hetero",
            Sexuality::Homo => "Homo",
            Sexuality::Bi => "Bi",
            Sexuality::Pan => "Pan",
            Sexuality::Ace => "Ace",
        }
    }
}

impl fmt::Display for Sexuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sexuality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Hetero" => Ok(Sexuality::Hetero),
            "Homo" => Ok(Sexuality::Homo),
            "Bi" => Ok(Sexuality::Bi),
            "Pan" => Ok(Sexuality::Pan),
            "Ace" => Ok(Sexuality::Ace),
            other => Err(Error::UnknownSexuality(other.to_string())),
        }
    }
}

/// A player as entered in the setup flow, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub gender: Gender,
    pub sexuality: Sexuality,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, gender: Gender, sexuality: Sexuality) -> Self {
        Self {
            name: name.into(),
            gender,
            sexuality,
        }
    }
}

/// A stored player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gender: Gender,
    pub sexuality: Sexuality,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Short description used in log lines, e.g. `Anna (Female, Bi)`
    pub fn describe(&self) -> String {
        format!("{} ({}, {})", self.name, self.gender, self.sexuality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
        for sexuality in Sexuality::ALL {
            assert_eq!(sexuality.as_str().parse::<Sexuality>().unwrap(), sexuality);
        }
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert_eq!(
            "Robot".parse::<Gender>(),
            Err(Error::UnknownGender("Robot".to_string()))
        );
        assert!("Heterosexuell".parse::<Sexuality>().is_err());
    }

    #[test]
    fn test_binary_gender() {
        assert!(Gender::Male.is_binary());
        assert!(Gender::Female.is_binary());
        assert!(!Gender::Diverse.is_binary());
    }
}
