//! Tod Game - round orchestration for a truth-or-dare game
//!
//! Ties the store and the selection rules together:
//! - `GameConfig`: attempt bound, history lengths, default pack, seed
//! - `Game`: active player draw, task drawing with the bounded
//!   question/target retry, session reset
//! - `catalog`: pack listing and unlock flags
//!
//! ```no_run
//! use tod_db::StoreLocation;
//! use tod_game::{store_handle, Game, GameConfig};
//! use tod_core::TaskType;
//!
//! # fn main() -> tod_game::Result<()> {
//! let handle = store_handle(StoreLocation::Path("tod.db".into()), None);
//! let mut game = Game::new(handle.get()?, GameConfig::default());
//! let task = game.play_turn(TaskType::Truth)?;
//! println!("{}", task.text);
//! # Ok(())
//! # }
//! ```

mod bootstrap;
pub mod catalog;
mod config;
mod error;
mod session;

pub use bootstrap::store_handle;
pub use catalog::{activate_hidden_packs, list_packs, unlock_all_packs, PackListing};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use session::{Game, Task};
