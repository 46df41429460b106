//! Finding accumulation, deduplication and report assembly
//!
//! All state here is scoped to a single `validate` call. Dedup happens at
//! two levels: repeated paragraph texts never reach the rules at all, and
//! repeated finding keys are dropped before they touch the report.

use std::collections::{BTreeMap, HashSet};
use template_types::{Category, ValidationMessage, ValidationReport, ValidationStats};

use crate::rules::Finding;

#[derive(Debug, Default)]
pub(crate) struct FindingAccumulator {
    seen_paragraphs: HashSet<String>,
    reported_keys: HashSet<String>,
    messages: Vec<ValidationMessage>,
    error_type_count: BTreeMap<Category, u64>,
    total_paragraphs: usize,
}

impl FindingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate a paragraph into rule evaluation.
    ///
    /// Returns `false` for empty texts and for texts already seen this run;
    /// such paragraphs are skipped entirely and do not count towards
    /// `totalParagraphs`.
    pub fn admit_paragraph(&mut self, text: &str) -> bool {
        if text.is_empty() || !self.seen_paragraphs.insert(text.to_string()) {
            return false;
        }
        self.total_paragraphs += 1;
        true
    }

    /// Append a finding unless its dedup key was already reported.
    ///
    /// Duplicates are dropped silently: no message, no counter increment.
    pub fn record(&mut self, finding: Finding) {
        let key = format!(
            "{}:{}:{}",
            finding.code.as_str(),
            finding.key,
            finding.content
        );
        if !self.reported_keys.insert(key) {
            return;
        }

        *self.error_type_count.entry(finding.code).or_insert(0) += 1;
        self.messages.push(ValidationMessage {
            code: finding.code,
            message: finding.message,
            suggestion: finding.suggestion,
            content: finding.content,
        });
    }

    /// Finish the run: freeze statistics and insert the sentinel if the
    /// finding list stayed empty.
    pub fn into_report(self) -> ValidationReport {
        let total_errors = self.messages.len();

        let mut messages = self.messages;
        if messages.is_empty() {
            messages.push(ValidationMessage {
                code: Category::NoErrors,
                message: "No errors found".to_string(),
                suggestion: "The document was checked and no issues were detected.".to_string(),
                content: "OK".to_string(),
            });
        }

        ValidationReport {
            messages,
            stats: ValidationStats {
                error_type_count: self.error_type_count,
                total_paragraphs: self.total_paragraphs,
                total_errors,
            },
        }
    }
}
