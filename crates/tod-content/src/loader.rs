//! RON catalog loader

use crate::error::Result;
use crate::schema::CatalogFile;
use crate::validate::validate;
use std::fs;
use std::path::Path;
use tod_core::{ContentSource, NewQuestion, Pack, StaticContent};

/// Catalog compiled into the binary
const DEFAULT_CATALOG: &str = include_str!("../content/default.ron");

/// Parse and validate a RON catalog
pub fn parse_catalog(source: &str) -> Result<StaticContent> {
    let file: CatalogFile = ron::from_str(source)?;
    let content = StaticContent::new(
        file.packs.into_iter().map(|row| row.into_pack()).collect(),
        file.questions.into_iter().map(|row| row.into_question()).collect(),
    );
    validate(&content)?;
    Ok(content)
}

/// Load a RON catalog from disk
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<StaticContent> {
    let source = fs::read_to_string(path.as_ref())?;
    parse_catalog(&source)
}

/// The built-in pack and question catalog
#[derive(Debug, Clone)]
pub struct DefaultContent {
    content: StaticContent,
}

impl DefaultContent {
    /// Parse the embedded catalog.
    ///
    /// A broken build-time catalog is logged and yields an empty one; the
    /// store then simply has nothing to seed.
    pub fn load() -> Self {
        let content = match parse_catalog(DEFAULT_CATALOG) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Embedded catalog is invalid: {}", e);
                StaticContent::default()
            }
        };
        Self { content }
    }

    pub fn content(&self) -> &StaticContent {
        &self.content
    }

    pub fn into_content(self) -> StaticContent {
        self.content
    }
}

impl ContentSource for DefaultContent {
    fn packs(&self) -> Vec<Pack> {
        self.content.packs.clone()
    }

    fn questions(&self) -> Vec<NewQuestion> {
        self.content.questions.clone()
    }
}

/// Default packs from the embedded catalog
pub fn load_default_packs() -> Vec<Pack> {
    DefaultContent::load().into_content().packs
}

/// Default questions from the embedded catalog
pub fn load_default_questions() -> Vec<NewQuestion> {
    DefaultContent::load().into_content().questions
}
