//! Wiring a store handle to its seed catalog

use std::sync::Arc;
use tod_content::{CsvContent, SeedContent};
use tod_db::{StoreHandle, StoreLocation};

/// Build the process-wide store handle.
///
/// A CSV catalog in `csv` replaces the built-in one when it loads cleanly.
/// The store itself opens lazily on the first [`StoreHandle::get`].
pub fn store_handle(location: StoreLocation, csv: Option<&CsvContent>) -> StoreHandle {
    let content = SeedContent::select(csv);
    log::info!("Seeding {:?} from {:?} catalog", location, content.origin());
    StoreHandle::new(location, Arc::new(content))
}
