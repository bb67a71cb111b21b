//! Question packs and the local user profile

use crate::error::{Error, Result};
use crate::identity::PackId;
use crate::question::TaskType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the pack that is always unlocked
pub const DEFAULT_PACK_NAME: &str = "Entspannt";

/// Fixed key of the singleton user profile
pub const PROFILE_ID: &str = "local_user_profile";

/// Which task types a pack offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackType {
    TruthAndDare,
    OnlyTruth,
    OnlyDare,
}

impl PackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackType::TruthAndDare => "truth_and_dare",
            PackType::OnlyTruth => "only_truth",
            PackType::OnlyDare => "only_dare",
        }
    }

    /// Whether questions of `kind` belong in a pack of this type
    pub fn offers(&self, kind: TaskType) -> bool {
        match self {
            PackType::TruthAndDare => true,
            PackType::OnlyTruth => kind == TaskType::Truth,
            PackType::OnlyDare => kind == TaskType::Dare,
        }
    }
}

impl fmt::Display for PackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "truth_and_dare" => Ok(PackType::TruthAndDare),
            "only_truth" => Ok(PackType::OnlyTruth),
            "only_dare" => Ok(PackType::OnlyDare),
            other => Err(Error::UnknownPackType(other.to_string())),
        }
    }
}

/// A themed collection of questions
///
/// `name` is unique and is what questions reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub id: PackId,
    pub name: String,
    pub description: String,
    pub is_18_plus: bool,
    #[serde(rename = "type")]
    pub kind: PackType,
    pub is_locked: bool,
    pub is_hidden: bool,
    pub cost_in_ads: u32,
}

/// Singleton profile holding unlock flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub promo_code_activated: bool,
    /// Grants access to hidden packs
    pub bst_code_activated: bool,
    pub unlocked_pack_names: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            promo_code_activated: false,
            bst_code_activated: false,
            unlocked_pack_names: vec![DEFAULT_PACK_NAME.to_string()],
        }
    }
}

impl UserProfile {
    /// Restore the invariant that the default pack is always unlocked.
    /// Returns true if the profile changed.
    pub fn ensure_default_unlocked(&mut self) -> bool {
        self.unlock(DEFAULT_PACK_NAME)
    }

    /// Add a pack name to the unlocked set. Returns true if it was new.
    pub fn unlock(&mut self, pack_name: &str) -> bool {
        if self.unlocked_pack_names.iter().any(|n| n == pack_name) {
            return false;
        }
        self.unlocked_pack_names.push(pack_name.to_string());
        true
    }

    /// Whether a pack can be played with this profile
    pub fn is_pack_unlocked(&self, pack: &Pack) -> bool {
        !pack.is_locked
            || self.promo_code_activated
            || self.unlocked_pack_names.contains(&pack.name)
            || (pack.is_hidden && self.bst_code_activated)
    }
}
