//! Seed content interface
//!
//! The store refreshes its catalog from a `ContentSource` whenever a
//! migration or an empty collection calls for it. How the content was
//! authored is not the store's concern.

use crate::pack::Pack;
use crate::question::NewQuestion;

/// Supplies the default pack and question catalog
pub trait ContentSource: Send + Sync {
    /// Default packs
    fn packs(&self) -> Vec<Pack>;

    /// Default questions; every `pack_name` names one of [`ContentSource::packs`]
    fn questions(&self) -> Vec<NewQuestion>;
}

/// A catalog held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticContent {
    pub packs: Vec<Pack>,
    pub questions: Vec<NewQuestion>,
}

impl StaticContent {
    pub fn new(packs: Vec<Pack>, questions: Vec<NewQuestion>) -> Self {
        Self { packs, questions }
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty() && self.questions.is_empty()
    }
}

impl ContentSource for StaticContent {
    fn packs(&self) -> Vec<Pack> {
        self.packs.clone()
    }

    fn questions(&self) -> Vec<NewQuestion> {
        self.questions.clone()
    }
}
