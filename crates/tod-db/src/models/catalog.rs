//! Question and pack models for database storage.

use crate::error::Result;
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use tod_core::{NewQuestion, Pack, PackId, Question, QuestionId, Template};

/// Stored question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db(
    primary_key(question_id -> u64),
    secondary_key(pack_type -> String)
)]
pub struct StoredQuestion {
    pub id: u64,
    pub pack_name: String,
    /// "truth" or "dare".
    pub kind: String,
    pub text_template: String,
    pub requires_target: bool,
}

impl StoredQuestion {
    fn question_id(&self) -> u64 {
        self.id
    }

    /// Compound `(pack_name, type)` index key.
    fn pack_type(&self) -> String {
        pack_type_key(&self.pack_name, &self.kind)
    }

    /// Create from a seed question and its assigned id.
    pub fn from_new(id: u64, question: &NewQuestion) -> Self {
        Self {
            id,
            pack_name: question.pack_name.clone(),
            kind: question.kind.as_str().to_string(),
            text_template: question.text_template.to_string(),
            requires_target: question.requires_target,
        }
    }

    /// Convert to a domain question.
    pub fn to_question(&self) -> Result<Question> {
        Ok(Question {
            id: QuestionId::new(self.id),
            pack_name: self.pack_name.clone(),
            kind: self.kind.parse()?,
            text_template: Template::parse(&self.text_template),
            requires_target: self.requires_target,
        })
    }
}

/// Build the compound index key. The separator cannot occur in authored
/// pack names; lookups still compare both fields exactly.
pub fn pack_type_key(pack_name: &str, kind: &str) -> String {
    format!("{}\u{1f}{}", pack_name, kind)
}

/// Stored pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct StoredPack {
    /// Primary key - stable slug.
    #[primary_key]
    pub id: String,
    /// Unique display name, referenced by questions.
    #[secondary_key(unique)]
    pub name: String,
    pub description: String,
    pub is_18_plus: bool,
    /// "truth_and_dare", "only_truth" or "only_dare".
    pub kind: String,
    pub is_locked: bool,
    pub is_hidden: bool,
    pub cost_in_ads: u32,
}

impl StoredPack {
    /// Create from a domain pack.
    pub fn from_pack(pack: &Pack) -> Self {
        Self {
            id: pack.id.as_str().to_string(),
            name: pack.name.clone(),
            description: pack.description.clone(),
            is_18_plus: pack.is_18_plus,
            kind: pack.kind.as_str().to_string(),
            is_locked: pack.is_locked,
            is_hidden: pack.is_hidden,
            cost_in_ads: pack.cost_in_ads,
        }
    }

    /// Convert to a domain pack.
    pub fn to_pack(&self) -> Result<Pack> {
        Ok(Pack {
            id: PackId::new(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            is_18_plus: self.is_18_plus,
            kind: self.kind.parse()?,
            is_locked: self.is_locked,
            is_hidden: self.is_hidden,
            cost_in_ads: self.cost_in_ads,
        })
    }
}
