//! Tod Content - default pack and question catalog
//!
//! The built-in catalog is a RON file compiled into the crate. An operator
//! may override it with a `packs.csv`/`questions.csv` pair; an override that
//! does not parse or validate is ignored in favour of the built-in one.

mod csv_loader;
mod error;
mod loader;
mod schema;
mod source;
mod validate;

pub use csv_loader::{parse_packs, parse_questions, CsvContent, PACKS_FILE, QUESTIONS_FILE};
pub use error::{Error, Result};
pub use loader::{
    load_catalog_file, load_default_packs, load_default_questions, parse_catalog, DefaultContent,
};
pub use schema::{PackRow, QuestionRow};
pub use source::{ContentOrigin, SeedContent};
pub use validate::validate;
