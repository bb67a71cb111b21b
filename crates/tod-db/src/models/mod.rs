//! Database models for persistent storage.

mod catalog;
mod meta;
mod player;
mod profile;

pub use catalog::*;
pub use meta::*;
pub use player::*;
pub use profile::*;
