//! Validation report value types
//!
//! Field names in the serialized form are frozen: the report consumers
//! (tabular UI, PDF export) bind by name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    FontMismatch,
    FontSizeMismatch,
    BoldError,
    AlignmentError,
    ContentMismatch,
    #[serde(rename = "TOCNotOnNewPage")]
    TocNotOnNewPage,
    /// Sentinel emitted when a run produced no other finding.
    NoErrors,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FontMismatch => "FontMismatch",
            Category::FontSizeMismatch => "FontSizeMismatch",
            Category::BoldError => "BoldError",
            Category::AlignmentError => "AlignmentError",
            Category::ContentMismatch => "ContentMismatch",
            Category::TocNotOnNewPage => "TOCNotOnNewPage",
            Category::NoErrors => "NoErrors",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub code: Category,
    pub message: String,
    pub suggestion: String,
    /// Trimmed text of the paragraph the finding refers to. Empty for
    /// document-level findings.
    pub content: String,
}

/// Aggregate statistics for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    /// Occurrence count per finding category. A `BTreeMap` keeps the
    /// serialized form deterministic across runs.
    pub error_type_count: BTreeMap<Category, u64>,

    /// Distinct non-empty paragraph texts examined.
    pub total_paragraphs: usize,

    /// Findings emitted before sentinel insertion. Zero exactly when the
    /// report carries the `NoErrors` sentinel.
    pub total_errors: usize,
}

/// Immutable result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Findings in discovery order. Never empty: a clean run carries the
    /// `NoErrors` sentinel.
    pub messages: Vec<ValidationMessage>,

    pub stats: ValidationStats,
}

impl ValidationReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// True when the run produced no finding other than the sentinel.
    pub fn is_clean(&self) -> bool {
        self.stats.total_errors == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_serializes_to_frozen_names() {
        for (category, expected) in [
            (Category::FontMismatch, "\"FontMismatch\""),
            (Category::FontSizeMismatch, "\"FontSizeMismatch\""),
            (Category::BoldError, "\"BoldError\""),
            (Category::AlignmentError, "\"AlignmentError\""),
            (Category::ContentMismatch, "\"ContentMismatch\""),
            (Category::TocNotOnNewPage, "\"TOCNotOnNewPage\""),
            (Category::NoErrors, "\"NoErrors\""),
        ] {
            assert_eq!(serde_json::to_string(&category).unwrap(), expected);
        }
    }

    #[test]
    fn test_stats_serialize_with_camel_case_field_names() {
        let mut stats = ValidationStats::default();
        stats.error_type_count.insert(Category::FontMismatch, 2);
        stats.total_paragraphs = 3;
        stats.total_errors = 2;

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"errorTypeCount\":{\"FontMismatch\":2}"));
        assert!(json.contains("\"totalParagraphs\":3"));
        assert!(json.contains("\"totalErrors\":2"));
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = ValidationReport {
            messages: vec![ValidationMessage {
                code: Category::ContentMismatch,
                message: "Missing required text: 'ВВЕДЕНИЕ'".to_string(),
                suggestion: "Make sure the document contains the text 'ВВЕДЕНИЕ'.".to_string(),
                content: String::new(),
            }],
            stats: ValidationStats {
                error_type_count: BTreeMap::from([(Category::ContentMismatch, 1)]),
                total_paragraphs: 5,
                total_errors: 1,
            },
        };

        let json = report.to_json().unwrap();
        let parsed: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_is_clean_tracks_total_errors() {
        let clean = ValidationReport {
            messages: vec![ValidationMessage {
                code: Category::NoErrors,
                message: "No errors found".to_string(),
                suggestion: "The document was checked and no issues were detected.".to_string(),
                content: "OK".to_string(),
            }],
            stats: ValidationStats::default(),
        };
        assert!(clean.is_clean());
    }
}
