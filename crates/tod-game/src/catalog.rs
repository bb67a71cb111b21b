//! Pack listing and unlock flags

use crate::error::Result;
use tod_core::{Pack, UserProfile};
use tod_db::Store;

/// A pack as shown on the pack selection screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackListing {
    pub pack: Pack,
    pub unlocked: bool,
}

/// List packs for the current profile, unlocked ones first.
///
/// Hidden packs appear only once the hidden-pack code is active.
pub fn list_packs(store: &Store) -> Result<Vec<PackListing>> {
    let profile = store.user_profile()?;
    let mut listings: Vec<PackListing> = store
        .all_packs(profile.bst_code_activated)?
        .into_iter()
        .map(|pack| PackListing {
            unlocked: profile.is_pack_unlocked(&pack),
            pack,
        })
        .collect();
    listings.sort_by_key(|l| !l.unlocked);
    Ok(listings)
}

/// Unlock every visible pack (promo code)
pub fn unlock_all_packs(store: &Store) -> Result<UserProfile> {
    let mut profile = store.user_profile()?;
    profile.promo_code_activated = true;
    for pack in store.all_packs(false)? {
        profile.unlock(&pack.name);
    }
    store.update_user_profile(&profile)?;
    log::info!("All packs unlocked");
    Ok(profile)
}

/// Reveal and unlock the hidden packs
pub fn activate_hidden_packs(store: &Store) -> Result<UserProfile> {
    let mut profile = store.user_profile()?;
    profile.bst_code_activated = true;
    for pack in store.all_packs(true)?.into_iter().filter(|p| p.is_hidden) {
        profile.unlock(&pack.name);
    }
    store.update_user_profile(&profile)?;
    log::info!("Hidden packs activated");
    Ok(profile)
}
