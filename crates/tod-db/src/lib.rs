//! Tod DB - Versioned local store using native_db
//!
//! Provides persistent storage for:
//! - Players entered during setup
//! - The question and pack catalog (refreshed from seed content)
//! - The singleton user profile with unlock flags
//!
//! The schema carries a version number. Opening a store applies every
//! pending migration in one transaction, then re-seeds any empty catalog
//! collection. [`StoreHandle`] memoizes the open store for the whole
//! process.

mod compat;
mod error;
mod handle;
pub mod migrations;
mod models;
mod queries;
mod seed;
mod store;

pub use compat::{gender_from_stored, sexuality_from_stored};
pub use error::{Error, Result};
pub use handle::{StoreHandle, StoreLocation};
pub use migrations::{Migration, BREAKING_SCHEMA_VERSION, CURRENT_SCHEMA_VERSION, MIGRATIONS};
pub use store::{Compatibility, Store};
