//! User profile model for database storage.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use tod_core::{UserProfile, PROFILE_ID};

/// Stored user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 4, version = 1)]
#[native_db]
pub struct StoredProfile {
    /// Always [`PROFILE_ID`] - single row.
    #[primary_key]
    pub id: String,
    pub promo_code_activated: bool,
    pub bst_code_activated: bool,
    pub unlocked_pack_names: Vec<String>,
}

impl StoredProfile {
    /// Create from a profile, restoring the default-pack invariant.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let mut profile = profile.clone();
        profile.ensure_default_unlocked();
        Self {
            id: PROFILE_ID.to_string(),
            promo_code_activated: profile.promo_code_activated,
            bst_code_activated: profile.bst_code_activated,
            unlocked_pack_names: profile.unlocked_pack_names,
        }
    }

    /// Convert to a profile.
    pub fn to_profile(&self) -> UserProfile {
        let mut profile = UserProfile {
            promo_code_activated: self.promo_code_activated,
            bst_code_activated: self.bst_code_activated,
            unlocked_pack_names: self.unlocked_pack_names.clone(),
        };
        profile.ensure_default_unlocked();
        profile
    }
}
