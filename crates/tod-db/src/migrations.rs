//! Schema migrations
//!
//! Each [`Migration`] upgrades the store to its `version`. Opening a store
//! applies every step newer than the stored version, in order, inside a
//! single write transaction that also records the new version. If any step
//! fails nothing is committed and the next open starts over from the same
//! version.
//!
//! Catalog collections (packs, questions) are cleared and reseeded from
//! the current seed content; players are never touched.

use crate::error::{Error, Result};
use crate::seed;
use native_db::transaction::RwTransaction;
use native_db::Database;
use tod_core::ContentSource;

/// Version written by this build.
pub const CURRENT_SCHEMA_VERSION: u32 = 5;

/// Stores older than this predate numeric player ids and the user
/// profile; callers should offer a reset before upgrading them.
pub const BREAKING_SCHEMA_VERSION: u32 = 4;

/// One upgrade step.
pub struct Migration {
    /// Version the store is at after this step.
    pub version: u32,
    pub description: &'static str,
    /// Must be idempotent.
    pub apply: fn(&RwTransaction, &dyn ContentSource) -> Result<()>,
}

/// All steps, in ascending version order.
pub static MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "players and questions",
        apply: v1_players_and_questions,
    },
    Migration {
        version: 2,
        description: "questions gain requires_target",
        apply: v2_question_targets,
    },
    Migration {
        version: 3,
        description: "pack catalog",
        apply: v3_packs,
    },
    Migration {
        version: 4,
        description: "numeric player ids and user profile",
        apply: v4_user_profile,
    },
    Migration {
        version: 5,
        description: "hidden packs",
        apply: v5_hidden_packs,
    },
];

fn v1_players_and_questions(rw: &RwTransaction, content: &dyn ContentSource) -> Result<()> {
    seed::reseed_questions(rw, content)
}

fn v2_question_targets(rw: &RwTransaction, content: &dyn ContentSource) -> Result<()> {
    seed::reseed_questions(rw, content)
}

fn v3_packs(rw: &RwTransaction, content: &dyn ContentSource) -> Result<()> {
    seed::reseed_packs(rw, content)?;
    seed::reseed_questions(rw, content)
}

fn v4_user_profile(rw: &RwTransaction, _content: &dyn ContentSource) -> Result<()> {
    seed::ensure_profile(rw)?;
    Ok(())
}

fn v5_hidden_packs(rw: &RwTransaction, content: &dyn ContentSource) -> Result<()> {
    seed::reseed_packs(rw, content)?;
    seed::reseed_questions(rw, content)?;
    seed::ensure_profile(rw)?;
    Ok(())
}

/// Apply every pending step up to `target`. Returns the version the store
/// was at before.
pub(crate) fn migrate(
    db: &Database<'_>,
    content: &dyn ContentSource,
    target: u32,
) -> Result<u32> {
    let run = || -> Result<u32> {
        let rw = db.rw_transaction()?;
        let from = seed::stored_version(&rw)?;
        if from > CURRENT_SCHEMA_VERSION {
            return Err(Error::SchemaTooNew {
                found: from,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        if from >= target {
            return Ok(from);
        }

        log::info!("Upgrading database from version {} to {}", from, target);
        for step in MIGRATIONS
            .iter()
            .filter(|m| m.version > from && m.version <= target)
        {
            log::info!("Applying migration {}: {}", step.version, step.description);
            (step.apply)(&rw, content)?;
        }
        seed::set_version(&rw, target)?;
        rw.commit()?;
        Ok(from)
    };
    run().map_err(Error::into_write_failure)
}
