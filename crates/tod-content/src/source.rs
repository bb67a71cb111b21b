//! Picking the catalog that seeds the store

use crate::csv_loader::CsvContent;
use crate::loader::DefaultContent;
use tod_core::{ContentSource, NewQuestion, Pack, StaticContent};

/// Where the active catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Csv,
    Embedded,
}

/// The catalog handed to the store
#[derive(Debug, Clone)]
pub struct SeedContent {
    origin: ContentOrigin,
    content: StaticContent,
}

impl SeedContent {
    /// Prefer a usable CSV catalog, fall back to the embedded one
    pub fn select(csv: Option<&CsvContent>) -> Self {
        if let Some(csv) = csv.filter(|c| c.is_present()) {
            let content = csv.load_or_empty();
            if !content.is_empty() {
                log::info!(
                    "Using CSV catalog: {} packs, {} questions",
                    content.packs.len(),
                    content.questions.len()
                );
                return Self {
                    origin: ContentOrigin::Csv,
                    content,
                };
            }
            log::warn!("CSV catalog unusable, falling back to embedded catalog");
        }
        Self::embedded()
    }

    pub fn embedded() -> Self {
        Self {
            origin: ContentOrigin::Embedded,
            content: DefaultContent::load().into_content(),
        }
    }

    pub fn origin(&self) -> ContentOrigin {
        self.origin
    }

    pub fn content(&self) -> &StaticContent {
        &self.content
    }
}

impl ContentSource for SeedContent {
    fn packs(&self) -> Vec<Pack> {
        self.content.packs.clone()
    }

    fn questions(&self) -> Vec<NewQuestion> {
        self.content.questions.clone()
    }
}
