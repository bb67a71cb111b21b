//! Row shapes shared by the RON and CSV catalogs
//!
//! Column names follow the persisted field names, so a CSV export with the
//! headers below loads without a mapping step:
//!
//! ```text
//! packs.csv:     id,name,description,is_18_plus,type,is_locked,is_hidden,cost_in_ads
//! questions.csv: pack_name,type,text_template,requires_target
//! ```

use serde::{Deserialize, Serialize};
use tod_core::{NewQuestion, Pack, PackId, PackType, TaskType};

/// One pack definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_18_plus: bool,
    #[serde(rename = "type")]
    pub kind: PackType,
    pub is_locked: bool,
    /// Older exports predate hidden packs
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub cost_in_ads: u32,
}

impl PackRow {
    pub fn into_pack(self) -> Pack {
        Pack {
            id: PackId::new(self.id),
            name: self.name,
            description: self.description,
            is_18_plus: self.is_18_plus,
            kind: self.kind,
            is_locked: self.is_locked,
            is_hidden: self.is_hidden,
            cost_in_ads: self.cost_in_ads,
        }
    }
}

/// One question definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRow {
    pub pack_name: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub text_template: String,
    pub requires_target: bool,
}

impl QuestionRow {
    pub fn into_question(self) -> NewQuestion {
        NewQuestion::new(self.pack_name, self.kind, self.text_template, self.requires_target)
    }
}

/// Top-level layout of a RON catalog file
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    pub packs: Vec<PackRow>,
    #[serde(default)]
    pub questions: Vec<QuestionRow>,
}
