//! Catalog seeding and bookkeeping inside a write transaction.

use crate::error::{Error, Result};
use crate::models::*;
use native_db::transaction::RwTransaction;
use tod_core::{ContentSource, NewQuestion, Pack, UserProfile, PROFILE_ID};

/// Read the schema version; 0 for a store that was never migrated.
pub(crate) fn stored_version(rw: &RwTransaction) -> Result<u32> {
    let meta: Option<StoredMeta> = rw.get().primary(SCHEMA_META_ID.to_string())?;
    Ok(meta.map(|m| m.version).unwrap_or(0))
}

/// Record the schema version.
pub(crate) fn set_version(rw: &RwTransaction, version: u32) -> Result<()> {
    rw.upsert(StoredMeta {
        id: SCHEMA_META_ID.to_string(),
        version,
    })?;
    Ok(())
}

/// Reserve `count` consecutive ids from a sequence and return the first.
pub(crate) fn allocate_ids(rw: &RwTransaction, sequence: &str, count: u64) -> Result<u64> {
    let current: Option<StoredSequence> = rw.get().primary(sequence.to_string())?;
    let first = current.map(|s| s.next).unwrap_or(1);
    rw.upsert(StoredSequence {
        name: sequence.to_string(),
        next: first + count,
    })?;
    Ok(first)
}

pub(crate) fn count_packs(rw: &RwTransaction) -> Result<usize> {
    let scan = rw.scan().primary::<StoredPack>()?;
    let iter = scan.all()?;
    Ok(iter.count())
}

pub(crate) fn count_questions(rw: &RwTransaction) -> Result<usize> {
    let scan = rw.scan().primary::<StoredQuestion>()?;
    let iter = scan.all()?;
    Ok(iter.count())
}

/// Remove every question. Returns how many were removed.
pub(crate) fn clear_questions(rw: &RwTransaction) -> Result<usize> {
    let stale: Vec<StoredQuestion> = {
        let scan = rw.scan().primary::<StoredQuestion>()?;
        let iter = scan.all()?;
        let questions: std::result::Result<Vec<StoredQuestion>, _> = iter.collect();
        questions.map_err(|e| Error::Database(e.to_string()))?
    };
    let count = stale.len();
    for question in stale {
        rw.remove(question)?;
    }
    Ok(count)
}

/// Remove every pack. Returns how many were removed.
pub(crate) fn clear_packs(rw: &RwTransaction) -> Result<usize> {
    let stale: Vec<StoredPack> = {
        let scan = rw.scan().primary::<StoredPack>()?;
        let iter = scan.all()?;
        let packs: std::result::Result<Vec<StoredPack>, _> = iter.collect();
        packs.map_err(|e| Error::Database(e.to_string()))?
    };
    let count = stale.len();
    for pack in stale {
        rw.remove(pack)?;
    }
    Ok(count)
}

pub(crate) fn insert_packs(rw: &RwTransaction, packs: &[Pack]) -> Result<usize> {
    for pack in packs {
        rw.insert(StoredPack::from_pack(pack))?;
    }
    Ok(packs.len())
}

/// Insert seed questions. Rows whose target flag disagrees with their
/// text are skipped so that bad content cannot block opening the store.
pub(crate) fn insert_questions(rw: &RwTransaction, questions: &[NewQuestion]) -> Result<usize> {
    let valid: Vec<&NewQuestion> = questions
        .iter()
        .filter(|q| match q.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping seed question in pack \"{}\": {}", q.pack_name, e);
                false
            }
        })
        .collect();

    let first = allocate_ids(rw, QUESTION_SEQUENCE, valid.len() as u64)?;
    for (offset, question) in valid.iter().enumerate() {
        rw.insert(StoredQuestion::from_new(first + offset as u64, question))?;
    }
    Ok(valid.len())
}

/// Replace the pack catalog with the seed packs.
pub(crate) fn reseed_packs(rw: &RwTransaction, content: &dyn ContentSource) -> Result<()> {
    let removed = clear_packs(rw)?;
    let added = insert_packs(rw, &content.packs())?;
    log::info!("Reseeded packs: removed {}, added {}", removed, added);
    Ok(())
}

/// Replace the question catalog with the seed questions.
pub(crate) fn reseed_questions(rw: &RwTransaction, content: &dyn ContentSource) -> Result<()> {
    let removed = clear_questions(rw)?;
    let added = insert_questions(rw, &content.questions())?;
    log::info!("Reseeded questions: removed {}, added {}", removed, added);
    Ok(())
}

/// Create the profile if missing and make sure the default pack is
/// unlocked. Returns true if anything was written.
pub(crate) fn ensure_profile(rw: &RwTransaction) -> Result<bool> {
    let stored: Option<StoredProfile> = rw.get().primary(PROFILE_ID.to_string())?;
    match stored {
        None => {
            rw.insert(StoredProfile::from_profile(&UserProfile::default()))?;
            Ok(true)
        }
        Some(existing) => {
            // to_profile restores the default pack; write back only if it had to
            let profile = existing.to_profile();
            if profile.unlocked_pack_names == existing.unlocked_pack_names {
                return Ok(false);
            }
            rw.upsert(StoredProfile::from_profile(&profile))?;
            Ok(true)
        }
    }
}
