//! Catalog consistency checks

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use tod_core::{Pack, StaticContent, DEFAULT_PACK_NAME};

/// Check that a catalog can seed a store.
///
/// Pack ids and names are unique, the default pack exists and is unlocked,
/// every question belongs to a known pack whose type offers it, and every
/// template agrees with its `requires_target` flag.
pub fn validate(content: &StaticContent) -> Result<()> {
    let mut ids = HashSet::new();
    let mut by_name: HashMap<&str, &Pack> = HashMap::new();

    for pack in &content.packs {
        if !ids.insert(pack.id.as_str()) {
            return inconsistent(format!("duplicate pack id \"{}\"", pack.id));
        }
        if by_name.insert(pack.name.as_str(), pack).is_some() {
            return inconsistent(format!("duplicate pack name \"{}\"", pack.name));
        }
    }

    match by_name.get(DEFAULT_PACK_NAME) {
        None => return inconsistent(format!("default pack {} is missing", DEFAULT_PACK_NAME)),
        Some(pack) if pack.is_locked => {
            return inconsistent(format!("default pack {} is locked", DEFAULT_PACK_NAME));
        }
        Some(_) => {}
    }

    for question in &content.questions {
        let Some(pack) = by_name.get(question.pack_name.as_str()) else {
            return inconsistent(format!(
                "question \"{}\" names unknown pack \"{}\"",
                question.text_template, question.pack_name
            ));
        };
        if !pack.kind.offers(question.kind) {
            return inconsistent(format!(
                "pack \"{}\" ({}) does not offer {} questions",
                pack.name,
                pack.kind.as_str(),
                question.kind
            ));
        }
        question.validate()?;
    }

    Ok(())
}

fn inconsistent(reason: String) -> Result<()> {
    Err(Error::Inconsistent(reason))
}
