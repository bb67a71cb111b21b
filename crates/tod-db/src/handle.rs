//! Process-wide store handle
//!
//! The handle opens the store on first use and hands out the same
//! `Arc<Store>` afterwards. Opening happens under a mutex, so callers that
//! race on first access wait for the one open in progress instead of
//! creating a second database.

use crate::error::Result;
use crate::store::{Compatibility, Store};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tod_core::ContentSource;

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    InMemory,
    Path(PathBuf),
}

enum Slot {
    Closed,
    /// Opened for inspection, migrations not applied yet.
    Opened(Arc<Store>),
    Ready(Arc<Store>),
}

impl Slot {
    fn store(&self) -> Option<Arc<Store>> {
        match self {
            Slot::Closed => None,
            Slot::Opened(store) | Slot::Ready(store) => Some(Arc::clone(store)),
        }
    }
}

/// Lazily opened, memoized store.
pub struct StoreHandle {
    location: StoreLocation,
    content: Arc<dyn ContentSource>,
    slot: Mutex<Slot>,
}

impl StoreHandle {
    pub fn new(location: StoreLocation, content: Arc<dyn ContentSource>) -> Self {
        Self {
            location,
            content,
            slot: Mutex::new(Slot::Closed),
        }
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Whether the store has been opened and upgraded.
    pub fn is_ready(&self) -> bool {
        matches!(*self.lock(), Slot::Ready(_))
    }

    /// The open store, opening and upgrading it on first call.
    ///
    /// A failed upgrade commits nothing; the next call retries it.
    pub fn get(&self) -> Result<Arc<Store>> {
        let mut slot = self.lock();
        if let Slot::Ready(store) = &*slot {
            return Ok(Arc::clone(store));
        }
        let store = match slot.store() {
            Some(store) => store,
            None => {
                let store = Arc::new(self.open_unmigrated()?);
                *slot = Slot::Opened(Arc::clone(&store));
                store
            }
        };
        store.upgrade()?;
        *slot = Slot::Ready(Arc::clone(&store));
        Ok(store)
    }

    /// Inspect the stored schema version without upgrading.
    pub fn check_compatibility(&self) -> Result<Compatibility> {
        let mut slot = self.lock();
        if let Some(store) = slot.store() {
            return store.check_compatibility();
        }

        let exists = match &self.location {
            StoreLocation::InMemory => false,
            StoreLocation::Path(path) => path.exists(),
        };
        if !exists {
            return Ok(Compatibility::for_version(0));
        }
        let store = Arc::new(self.open_unmigrated()?);
        let compat = store.check_compatibility()?;
        *slot = Slot::Opened(store);
        Ok(compat)
    }

    /// Delete the whole store. Safe to call when it was never opened.
    ///
    /// `Arc<Store>` clones handed out earlier keep the old database alive
    /// until dropped; drop them before reopening a file-backed store.
    pub fn reset(&self) -> Result<()> {
        let mut slot = self.lock();
        *slot = Slot::Closed;
        if let StoreLocation::Path(path) = &self.location {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        log::info!("Database reset");
        Ok(())
    }

    fn open_unmigrated(&self) -> Result<Store> {
        match &self.location {
            StoreLocation::InMemory => Store::in_memory_unmigrated(Arc::clone(&self.content)),
            StoreLocation::Path(path) => Store::open_unmigrated(path, Arc::clone(&self.content)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::CURRENT_SCHEMA_VERSION;
    use std::thread;
    use tod_content::DefaultContent;
    use tod_core::{Gender, NewPlayer, Sexuality};

    fn content() -> Arc<dyn ContentSource> {
        Arc::new(DefaultContent::load())
    }

    #[test]
    fn test_get_is_memoized() {
        let handle = StoreHandle::new(StoreLocation::InMemory, content());
        assert!(!handle.is_ready());

        let a = handle.get().unwrap();
        let b = handle.get().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(handle.is_ready());
    }

    #[test]
    fn test_concurrent_first_access_opens_once() {
        let handle = Arc::new(StoreHandle::new(StoreLocation::InMemory, content()));
        let stores: Vec<Arc<Store>> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                thread::spawn(move || handle.get().unwrap())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|t| t.join().unwrap())
            .collect();

        assert!(stores.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_reset_before_open_is_safe() {
        let dir = tempfile::tempdir().unwrap();
        let location = StoreLocation::Path(dir.path().join("tod.db"));
        let handle = StoreHandle::new(location, content());
        handle.reset().unwrap();

        let memory = StoreHandle::new(StoreLocation::InMemory, content());
        memory.reset().unwrap();
    }

    #[test]
    fn test_compatibility_of_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tod.db");
        let handle = StoreHandle::new(StoreLocation::Path(path.clone()), content());

        let compat = handle.check_compatibility().unwrap();
        assert_eq!(compat, Compatibility::for_version(0));
        assert!(!path.exists());
    }

    #[test]
    fn test_reset_discards_players() {
        let dir = tempfile::tempdir().unwrap();
        let location = StoreLocation::Path(dir.path().join("tod.db"));
        let handle = StoreHandle::new(location, content());

        {
            let store = handle.get().unwrap();
            store
                .add_player(&NewPlayer::new("Anna", Gender::Female, Sexuality::Pan))
                .unwrap();
        }
        assert_eq!(
            handle.check_compatibility().unwrap().stored_version,
            CURRENT_SCHEMA_VERSION
        );

        handle.reset().unwrap();
        assert!(!handle.is_ready());

        let store = handle.get().unwrap();
        assert!(store.all_players().unwrap().is_empty());
        assert!(!store.all_questions().unwrap().is_empty());
    }
}
