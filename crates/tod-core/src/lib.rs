//! Tod Core - Domain model and selection rules for a truth-or-dare game
//!
//! This crate provides the pure, storage-independent parts of the game:
//! - Players with declared gender and sexuality (`Player`, `Gender`, `Sexuality`)
//! - Questions, packs and the user profile (`Question`, `Pack`, `UserProfile`)
//! - Question text templates with typed placeholders (`Template`)
//! - Deterministic RNG and bounded recency history
//! - The targeting engine (`eligible_targets`, `pick_target`)
//! - The question selector (`select_question`)
//!
//! ## Layering
//!
//! ```text
//! tod-game (rounds, retries, catalog)
//!  ├── tod-db (versioned store)
//!  ├── tod-content (default catalog)
//!  └── tod-core (this crate, no I/O)
//! ```
//!
//! Everything here is synchronous and side-effect free apart from `log`
//! output; storage and content loading live in the crates above.

mod content;
mod error;
mod history;
mod identity;
mod pack;
mod player;
mod question;
mod rng;
pub mod selection;
pub mod targeting;
mod template;

pub use content::{ContentSource, StaticContent};
pub use error::{Error, Result};
pub use history::RecentHistory;
pub use identity::{PackId, PlayerId, QuestionId};
pub use pack::{Pack, PackType, UserProfile, DEFAULT_PACK_NAME, PROFILE_ID};
pub use player::{Gender, NewPlayer, Player, Sexuality};
pub use question::{NewQuestion, Question, TaskType};
pub use rng::GameRng;
pub use selection::{pick_avoiding_recent, select_question};
pub use targeting::{
    eligible_targets, is_eligible_target, log_targeting_table, pick_target, targeting_table,
};
pub use template::{Placeholder, Segment, Template};
