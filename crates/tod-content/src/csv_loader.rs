//! CSV catalog loader
//!
//! An operator can ship `packs.csv` and `questions.csv` next to the store to
//! replace the built-in catalog. A file that fails to parse or validate
//! counts as absent.

use crate::error::{Error, Result};
use crate::schema::{PackRow, QuestionRow};
use crate::validate::validate;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tod_core::{NewQuestion, Pack, StaticContent};

pub const PACKS_FILE: &str = "packs.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Deserialize every row, handing each one to `accept` with its starting line
fn rows<R, T, U, F>(input: R, mut accept: F) -> Result<Vec<U>>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut(T, u64) -> Result<U>,
{
    let mut rdr = reader(input);
    let headers = rdr.headers()?.clone();
    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: T = record.deserialize(Some(&headers))?;
        out.push(accept(row, line)?);
    }
    Ok(out)
}

/// Parse pack rows
pub fn parse_packs<R: Read>(input: R) -> Result<Vec<Pack>> {
    rows(input, |row: PackRow, line| {
        if row.id.is_empty() || row.name.is_empty() {
            return Err(Error::InvalidRow {
                line,
                reason: "pack id and name must not be empty".to_string(),
            });
        }
        Ok(row.into_pack())
    })
}

/// Parse question rows; each template must agree with its target flag
pub fn parse_questions<R: Read>(input: R) -> Result<Vec<NewQuestion>> {
    rows(input, |row: QuestionRow, line| {
        let question = row.into_question();
        question.validate().map_err(|e| Error::InvalidRow {
            line,
            reason: e.to_string(),
        })?;
        Ok(question)
    })
}

/// A catalog stored as a pair of CSV files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvContent {
    packs_path: PathBuf,
    questions_path: PathBuf,
}

impl CsvContent {
    pub fn new(packs_path: impl Into<PathBuf>, questions_path: impl Into<PathBuf>) -> Self {
        Self {
            packs_path: packs_path.into(),
            questions_path: questions_path.into(),
        }
    }

    /// `packs.csv` and `questions.csv` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(PACKS_FILE), dir.join(QUESTIONS_FILE))
    }

    pub fn packs_path(&self) -> &Path {
        &self.packs_path
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    /// Both files exist
    pub fn is_present(&self) -> bool {
        self.packs_path.is_file() && self.questions_path.is_file()
    }

    /// Parse and validate both files
    pub fn load(&self) -> Result<StaticContent> {
        let packs = parse_packs(File::open(&self.packs_path)?)?;
        let questions = parse_questions(File::open(&self.questions_path)?)?;
        let content = StaticContent::new(packs, questions);
        validate(&content)?;
        Ok(content)
    }

    /// Like [`CsvContent::load`], but any failure yields an empty catalog
    pub fn load_or_empty(&self) -> StaticContent {
        match self.load() {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "Ignoring CSV catalog ({}, {}): {}",
                    self.packs_path.display(),
                    self.questions_path.display(),
                    e
                );
                StaticContent::default()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tod_core::{PackType, TaskType};

    pub(crate) const PACKS_CSV: &str = "\
id,name,description,is_18_plus,type,is_locked,is_hidden,cost_in_ads
entspannt,Entspannt,Ganz ruhig,false,truth_and_dare,false,false,0
tief,Tiefgründig,\"Fragen, die bleiben\",false,only_truth,true,false,1
";

    pub(crate) const QUESTIONS_CSV: &str = "\
pack_name,type,text_template,requires_target
Entspannt,truth,\"{playerName}, was isst du gern?\",false
Entspannt,dare,\"{playerName}, winke {targetPlayerName} zu.\",true
Tiefgründig,truth,\"{playerName}, was bedeutet dir Freundschaft?\",false
";

    pub(crate) fn write_catalog(dir: &Path, packs: &str, questions: &str) -> CsvContent {
        fs::write(dir.join(PACKS_FILE), packs).unwrap();
        fs::write(dir.join(QUESTIONS_FILE), questions).unwrap();
        CsvContent::in_dir(dir)
    }

    #[test]
    fn test_parse_packs() {
        let packs = parse_packs(PACKS_CSV.as_bytes()).unwrap();
        assert_eq!(packs.len(), 2);
        assert_eq!(packs[1].description, "Fragen, die bleiben");
        assert_eq!(packs[1].kind, PackType::OnlyTruth);
        assert!(packs[1].is_locked);
        assert_eq!(packs[1].cost_in_ads, 1);
    }

    #[test]
    fn test_parse_packs_without_hidden_column() {
        let csv = "\
id,name,description,is_18_plus,type,is_locked,cost_in_ads
entspannt,Entspannt,,false,truth_and_dare,false,0
";
        let packs = parse_packs(csv.as_bytes()).unwrap();
        assert!(!packs[0].is_hidden);
    }

    #[test]
    fn test_parse_questions() {
        let questions = parse_questions(QUESTIONS_CSV.as_bytes()).unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].kind, TaskType::Dare);
        assert!(questions[1].requires_target);
        assert!(questions[1].text_template.needs_target());
    }

    #[test]
    fn test_parse_questions_rejects_flag_mismatch() {
        let csv = "\
pack_name,type,text_template,requires_target
Entspannt,truth,\"{playerName}, ok?\",false
Entspannt,dare,\"{playerName}, umarme {targetPlayerName}.\",false
";
        match parse_questions(csv.as_bytes()) {
            Err(Error::InvalidRow { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected invalid row, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_row_line_follows_multiline_fields() {
        let csv = "\
pack_name,type,text_template,requires_target
Entspannt,truth,\"{playerName},
was war dein
schönster Tag?\",false
Entspannt,dare,\"{playerName}, umarme {targetPlayerName}.\",false
";
        match parse_questions(csv.as_bytes()) {
            Err(Error::InvalidRow { line, .. }) => assert_eq!(line, 5),
            other => panic!("expected invalid row, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let csv = "\
pack_name,type,text_template,requires_target
Entspannt,maybe,\"{playerName}?\",false
";
        assert!(matches!(parse_questions(csv.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_catalog(dir.path(), PACKS_CSV, QUESTIONS_CSV);
        assert!(source.is_present());

        let content = source.load().unwrap();
        assert_eq!(content.packs.len(), 2);
        assert_eq!(content.questions.len(), 3);
    }

    #[test]
    fn test_malformed_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let broken = format!("{}Entspannt,truth\n", QUESTIONS_CSV);
        let source = write_catalog(dir.path(), PACKS_CSV, &broken);

        assert!(source.load().is_err());
        assert!(source.load_or_empty().is_empty());
    }

    #[test]
    fn test_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvContent::in_dir(dir.path());
        assert!(!source.is_present());
        assert!(matches!(source.load(), Err(Error::Io(_))));
        assert!(source.load_or_empty().is_empty());
    }
}
