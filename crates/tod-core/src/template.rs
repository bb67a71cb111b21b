//! Question text templates
//!
//! A template is a sequence of literal spans and typed placeholders.
//! Rendering is a fold over the segments, so a player whose name happens to
//! contain `{targetPlayerName}` is inserted verbatim and never re-expanded.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A slot filled in at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// The acting player
    PlayerName,
    /// The player chosen by the targeting engine
    TargetPlayerName,
}

impl Placeholder {
    pub const ALL: [Placeholder; 2] = [Placeholder::PlayerName, Placeholder::TargetPlayerName];

    /// Token as it appears in authored question text
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::PlayerName => "{playerName}",
            Placeholder::TargetPlayerName => "{targetPlayerName}",
        }
    }
}

/// One piece of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Parsed question text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse authored text. Unrecognized braces stay literal.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while !rest.is_empty() {
            if let Some(placeholder) = Placeholder::ALL
                .iter()
                .find(|p| rest.starts_with(p.token()))
            {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(*placeholder));
                rest = &rest[placeholder.token().len()..];
                continue;
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            literal.push(ch);
            rest = &rest[ch.len_utf8()..];
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// The parsed segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the template contains the given placeholder
    pub fn mentions(&self, placeholder: Placeholder) -> bool {
        self.segments.contains(&Segment::Placeholder(placeholder))
    }

    /// Whether the template needs a target player to render
    pub fn needs_target(&self) -> bool {
        self.mentions(Placeholder::TargetPlayerName)
    }

    /// Render with the given names.
    ///
    /// Fails with [`Error::MissingTarget`] if the template references the
    /// target player and `target` is `None`.
    pub fn render(&self, player: &str, target: Option<&str>) -> Result<String> {
        self.segments
            .iter()
            .try_fold(String::new(), |mut out, segment| -> Result<String> {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Placeholder(Placeholder::PlayerName) => out.push_str(player),
                    Segment::Placeholder(Placeholder::TargetPlayerName) => {
                        out.push_str(target.ok_or(Error::MissingTarget)?)
                    }
                }
                Ok(out)
            })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder(p) => f.write_str(p.token())?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Template> for String {
    fn from(t: Template) -> Self {
        t.to_string()
    }
}
