//! Database store wrapper.

use crate::error::{Error, Result};
use crate::migrations::{self, BREAKING_SCHEMA_VERSION, CURRENT_SCHEMA_VERSION};
use crate::models::*;
use crate::seed;
use native_db::transaction::RwTransaction;
use native_db::*;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tod_core::ContentSource;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredPlayer>().unwrap();
    models.define::<StoredQuestion>().unwrap();
    models.define::<StoredPack>().unwrap();
    models.define::<StoredProfile>().unwrap();
    models.define::<StoredMeta>().unwrap();
    models.define::<StoredSequence>().unwrap();
    models
});

/// Result of inspecting the stored schema version without upgrading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compatibility {
    /// 0 when the store has never been migrated.
    pub stored_version: u32,
    /// The store can be opened and upgraded without losing anything the
    /// user would miss.
    pub compatible: bool,
    /// The caller should ask the user before resetting the store.
    pub needs_reset: bool,
}

impl Compatibility {
    /// Classify a stored schema version.
    pub fn for_version(stored_version: u32) -> Self {
        let needs_reset = stored_version != 0
            && !(BREAKING_SCHEMA_VERSION..=CURRENT_SCHEMA_VERSION).contains(&stored_version);
        Self {
            stored_version,
            compatible: !needs_reset,
            needs_reset,
        }
    }
}

/// Database store for players, catalog and profile.
pub struct Store {
    pub(crate) db: Database<'static>,
    content: Arc<dyn ContentSource>,
}

impl Store {
    /// Open or create a database at the given path and bring it to the
    /// current schema.
    pub fn open(path: impl AsRef<Path>, content: Arc<dyn ContentSource>) -> Result<Self> {
        let store = Self::open_unmigrated(path.as_ref(), content)?;
        store.upgrade()?;
        Ok(store)
    }

    /// Create an in-memory database at the current schema.
    pub fn in_memory(content: Arc<dyn ContentSource>) -> Result<Self> {
        let store = Self::in_memory_unmigrated(content)?;
        store.upgrade()?;
        Ok(store)
    }

    /// Open without running migrations.
    pub(crate) fn open_unmigrated(path: &Path, content: Arc<dyn ContentSource>) -> Result<Self> {
        check_location(path)?;
        let db = Builder::new()
            .create(&MODELS, path)
            .map_err(|e| Error::StoreUnavailable(e.to_string()))?;
        log::info!("Database opened at {}", path.display());
        Ok(Self { db, content })
    }

    pub(crate) fn in_memory_unmigrated(content: Arc<dyn ContentSource>) -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::StoreUnavailable(e.to_string()))?;
        Ok(Self { db, content })
    }

    /// The seed content used for migrations and reseeding.
    pub fn content(&self) -> &dyn ContentSource {
        self.content.as_ref()
    }

    /// Stored schema version; 0 if never migrated.
    pub fn schema_version(&self) -> Result<u32> {
        let r = self.db.r_transaction()?;
        let meta: Option<StoredMeta> = r.get().primary(SCHEMA_META_ID.to_string())?;
        Ok(meta.map(|m| m.version).unwrap_or(0))
    }

    /// Inspect the schema version without upgrading.
    pub fn check_compatibility(&self) -> Result<Compatibility> {
        Ok(Compatibility::for_version(self.schema_version()?))
    }

    /// Apply pending migrations, then reseed any empty catalog collection.
    pub fn upgrade(&self) -> Result<()> {
        let version = self.schema_version()?;
        if version > CURRENT_SCHEMA_VERSION {
            return Err(Error::SchemaTooNew {
                found: version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        if version < CURRENT_SCHEMA_VERSION {
            migrations::migrate(&self.db, self.content(), CURRENT_SCHEMA_VERSION)?;
        }
        self.ensure_seeded()
    }

    /// Reseed packs or questions if either collection is empty and make
    /// sure the profile exists.
    pub fn ensure_seeded(&self) -> Result<()> {
        let content = self.content.as_ref();
        self.write(|rw| {
            if seed::count_packs(rw)? == 0 {
                seed::insert_packs(rw, &content.packs())?;
                log::info!("Seeded empty pack collection");
            }
            if seed::count_questions(rw)? == 0 {
                seed::insert_questions(rw, &content.questions())?;
                log::info!("Seeded empty question collection");
            }
            seed::ensure_profile(rw)?;
            Ok(())
        })
    }

    /// Run `op` in a write transaction and commit it. Any database failure
    /// is reported as [`Error::WriteFailed`]; nothing is retried.
    pub(crate) fn write<T>(&self, op: impl FnOnce(&RwTransaction) -> Result<T>) -> Result<T> {
        let run = || -> Result<T> {
            let rw = self.db.rw_transaction()?;
            let out = op(&rw)?;
            rw.commit()?;
            Ok(out)
        };
        run().map_err(Error::into_write_failure)
    }
}

/// Refuse locations that cannot hold a database file.
fn check_location(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::StoreUnavailable(format!(
            "{} is a directory",
            path.display()
        )));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(Error::StoreUnavailable(format!(
                "directory {} does not exist",
                parent.display()
            )))
        }
        _ => Ok(()),
    }
}
