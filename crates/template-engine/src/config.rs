//! Template convention configuration
//!
//! The conventions the engine checks against (font, sizes, marker phrases,
//! title-page blocks) are data, not code. [`ValidationConfig::default`]
//! carries the built-in thesis-template conventions; deployments can load
//! their own from TOML instead of recompiling.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Conventions one validation run checks against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Font family every run must use.
    #[serde(default = "default_font_family")]
    pub required_font_family: String,

    /// Accepted font sizes.
    #[serde(default)]
    pub font_size_policy: FontSizePolicy,

    /// Literal phrases that must be bold and left-aligned wherever they
    /// appear (section headings, metadata field labels).
    #[serde(default = "default_marker_phrases")]
    pub marker_phrases: Vec<String>,

    /// Title-page word-sets. A paragraph containing every word of a set
    /// must be center-aligned.
    #[serde(default = "default_title_blocks")]
    pub title_blocks: Vec<TitleBlock>,

    /// Phrases the document as a whole must contain somewhere.
    #[serde(default = "default_required_phrases")]
    pub required_phrases: Vec<String>,

    /// Literal token marking the table-of-contents paragraph.
    #[serde(default = "default_toc_marker")]
    pub toc_marker: String,
}

impl ValidationConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            required_font_family: default_font_family(),
            font_size_policy: FontSizePolicy::default(),
            marker_phrases: default_marker_phrases(),
            title_blocks: default_title_blocks(),
            required_phrases: default_required_phrases(),
            toc_marker: default_toc_marker(),
        }
    }
}

/// Which font sizes rule 2 accepts.
///
/// Historically the check existed in two diverging variants; the policy is
/// explicit configuration so a deployment picks one deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum FontSizePolicy {
    /// Inclusive range of accepted sizes in points. The canonical policy.
    Range { min: u32, max: u32 },
    /// Exactly one accepted size. Deprecated alternative kept for
    /// deployments that still require it.
    Exact { size: u32 },
}

impl FontSizePolicy {
    pub fn permits(&self, size: u32) -> bool {
        match *self {
            FontSizePolicy::Range { min, max } => (min..=max).contains(&size),
            FontSizePolicy::Exact { size: accepted } => size == accepted,
        }
    }

    /// Human wording for suggestions.
    pub fn describe(&self) -> String {
        match *self {
            FontSizePolicy::Range { min, max } => format!("{}-{} pt", min, max),
            FontSizePolicy::Exact { size } => format!("{} pt", size),
        }
    }
}

impl Default for FontSizePolicy {
    fn default() -> Self {
        FontSizePolicy::Range { min: 12, max: 14 }
    }
}

/// A set of words that must all appear, order-independent, within one
/// center-aligned paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBlock {
    pub label: String,
    pub words: Vec<String>,
}

fn default_font_family() -> String {
    "Times New Roman".to_string()
}

fn default_toc_marker() -> String {
    "Оглавление".to_string()
}

/// Section headings required by the thesis template.
fn section_headings() -> Vec<String> {
    [
        "СПИСОК СОКРАЩЕНИЙ И УСЛОВНЫХ ОБОЗНАЧЕНИЙ",
        "ТЕРМИНЫ И ОПРЕДЕЛЕНИЯ",
        "ВВЕДЕНИЕ",
        "ЗАКЛЮЧЕНИЕ",
        "СПИСОК ИСПОЛЬЗОВАННЫХ ИСТОЧНИКОВ",
        "ПРИЛОЖЕНИЕ",
    ]
    .map(String::from)
    .to_vec()
}

/// Bilingual metadata field labels from the title pages.
fn metadata_labels() -> Vec<String> {
    [
        "Обучающийся / Student:",
        "Факультет / Faculty:",
        "Группа / Group:",
        "Направление подготовки / Subject area:",
        "Образовательная программа / Educational program:",
        "Язык реализации ОП / Language of the educational program:",
        "Квалификация / Degree level:",
        "Руководитель ВКР / Thesis supervisor:",
    ]
    .map(String::from)
    .to_vec()
}

fn default_marker_phrases() -> Vec<String> {
    let mut phrases = section_headings();
    phrases.extend(metadata_labels());
    phrases
}

fn default_required_phrases() -> Vec<String> {
    default_marker_phrases()
}

fn default_title_blocks() -> Vec<TitleBlock> {
    fn block(label: &str, words: &[&str]) -> TitleBlock {
        TitleBlock {
            label: label.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    vec![
        block(
            "ministry-header",
            &[
                "Министерство",
                "науки",
                "и",
                "высшего",
                "образования",
                "Российской",
                "Федерации",
            ],
        ),
        block(
            "institution",
            &[
                "ФЕДЕРАЛЬНОЕ",
                "ГОСУДАРСТВЕННОЕ",
                "АВТОНОМНОЕ",
                "ОБРАЗОВАТЕЛЬНОЕ",
                "УЧРЕЖДЕНИЕ",
                "ВЫСШЕГО",
                "ОБРАЗОВАНИЯ",
            ],
        ),
        block(
            "university",
            &[
                "НАЦИОНАЛЬНЫЙ",
                "ИССЛЕДОВАТЕЛЬСКИЙ",
                "УНИВЕРСИТЕТ",
                "ИТМО",
                "ITMO",
                "University",
            ],
        ),
        block("title-ru", &["ВЫПУСКНАЯ", "КВАЛИФИКАЦИОННАЯ", "РАБОТА"]),
        block("title-en", &["GRADUATION", "THESIS"]),
    ]
}
