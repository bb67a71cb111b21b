//! Bookkeeping models: schema version and id sequences.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Key of the schema metadata row.
pub const SCHEMA_META_ID: &str = "schema";

/// Sequence names for generated ids.
pub const PLAYER_SEQUENCE: &str = "players";
pub const QUESTION_SEQUENCE: &str = "questions";

/// Stored schema metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 5, version = 1)]
#[native_db]
pub struct StoredMeta {
    /// Always [`SCHEMA_META_ID`] - single row.
    #[primary_key]
    pub id: String,
    /// Version of the last applied migration.
    pub version: u32,
}

/// Stored id sequence.
///
/// Ids handed out are never reused, even after deletes or reseeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 6, version = 1)]
#[native_db]
pub struct StoredSequence {
    #[primary_key]
    pub name: String,
    /// Next id to hand out.
    pub next: u64,
}
