//! Player model for database storage.

use crate::compat::{gender_from_stored, sexuality_from_stored};
use chrono::{DateTime, Utc};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use tod_core::{NewPlayer, Player, PlayerId};

/// Stored player.
///
/// Gender and sexuality are kept as strings so that rows written by older
/// versions (German labels) still load; see [`crate::compat`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredPlayer {
    /// Primary key - store-assigned player ID.
    #[primary_key]
    pub id: u64,
    /// Display name, not unique.
    #[secondary_key]
    pub name: String,
    pub gender: String,
    pub sexuality: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at_ms: i64,
}

impl StoredPlayer {
    /// Create from a new player and its assigned id.
    pub fn from_new(id: u64, player: &NewPlayer, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: player.name.clone(),
            gender: player.gender.as_str().to_string(),
            sexuality: player.sexuality.as_str().to_string(),
            created_at_ms: created_at.timestamp_millis(),
        }
    }

    /// Create from an existing player (used for updates).
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id.raw(),
            name: player.name.clone(),
            gender: player.gender.as_str().to_string(),
            sexuality: player.sexuality.as_str().to_string(),
            created_at_ms: player.created_at.timestamp_millis(),
        }
    }

    /// Convert to a domain player, translating legacy values.
    pub fn to_player(&self) -> Player {
        Player {
            id: PlayerId::new(self.id),
            name: self.name.clone(),
            gender: gender_from_stored(&self.gender),
            sexuality: sexuality_from_stored(&self.sexuality),
            created_at: DateTime::from_timestamp_millis(self.created_at_ms).unwrap_or_default(),
        }
    }
}
