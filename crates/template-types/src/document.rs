//! In-memory document model consumed by the validation engine
//!
//! The engine does not read document containers itself. A parser (DOCX,
//! LaTeX, ...) produces an ordered sequence of [`Paragraph`] values plus a
//! style lookup, and hands them over behind the [`DocumentModel`] trait.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Paragraph-level alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
}

/// Character-level bold override carried by a run.
///
/// `Unset` is not the same as `Off`: an unset run falls through to the
/// paragraph style, an explicit `Off` cancels bold for the whole paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoldOverride {
    On,
    Off,
    #[default]
    Unset,
}

/// A contiguous span of text sharing one set of character formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub text: String,

    /// Font family name, if the run sets one.
    #[serde(default)]
    pub font_family: Option<String>,

    /// Font size in points, if the run sets one.
    #[serde(default)]
    pub font_size: Option<u32>,

    #[serde(default)]
    pub bold: BoldOverride,
}

/// A block of document text composed of runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,

    /// Identifier of the named style this paragraph references, if any.
    #[serde(default)]
    pub style_id: Option<String>,

    /// Direct alignment. `None` means "inherit from the style", which is
    /// distinct from an explicit `Some(Alignment::Left)`.
    #[serde(default)]
    pub alignment: Option<Alignment>,
}

impl Paragraph {
    /// Trimmed concatenation of all run texts.
    pub fn text(&self) -> String {
        let joined: String = self.runs.iter().map(|run| run.text.as_str()).collect();
        joined.trim().to_string()
    }
}

/// A named bundle of default formatting properties.
///
/// Styles are a flat, one-level fallback target. They never inherit from
/// other styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub bold: Option<bool>,

    #[serde(default)]
    pub alignment: Option<Alignment>,
}

/// Failure of the document model collaborator.
///
/// These are engine-level failures, not findings: a malformed model aborts
/// the validation run and no report is produced.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("document model is malformed: {0}")]
    Malformed(String),

    #[error("document model is unavailable: {0}")]
    Unavailable(String),
}

/// Contract the engine requires from the document model collaborator.
pub trait DocumentModel {
    /// Ordered, finite sequence of paragraphs.
    fn paragraphs(&self) -> Result<&[Paragraph], ModelError>;

    /// Resolve a style by identifier. `None` when the style is not defined.
    fn style(&self, style_id: &str) -> Option<&Style>;
}

/// Materialized document model, deserializable from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryDocument {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    #[serde(default)]
    pub styles: HashMap<String, Style>,
}

impl InMemoryDocument {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            styles: HashMap::new(),
        }
    }

    pub fn with_style(mut self, style_id: impl Into<String>, style: Style) -> Self {
        self.styles.insert(style_id.into(), style);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Malformed(e.to_string()))
    }
}

impl DocumentModel for InMemoryDocument {
    fn paragraphs(&self) -> Result<&[Paragraph], ModelError> {
        Ok(&self.paragraphs)
    }

    fn style(&self, style_id: &str) -> Option<&Style> {
        self.styles.get(style_id)
    }
}
