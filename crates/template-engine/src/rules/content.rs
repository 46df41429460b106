//! Document-level checks run after the paragraph traversal

use template_types::{Alignment, Category};

use crate::config::ValidationConfig;
use crate::rules::Finding;

/// A paragraph that contained the table-of-contents marker, captured during
/// the traversal together with its direct (unresolved) alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocCandidate {
    pub text: String,
    pub alignment: Option<Alignment>,
}

/// Require each configured phrase to appear somewhere in the document.
///
/// `document_text` is the newline-joined concatenation of all
/// first-occurrence paragraph texts.
pub fn check_required_phrases(document_text: &str, config: &ValidationConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    for phrase in &config.required_phrases {
        if document_text.contains(phrase.as_str()) {
            continue;
        }

        findings.push(Finding {
            code: Category::ContentMismatch,
            key: phrase.clone(),
            message: format!("Missing required text: '{}'", phrase),
            suggestion: format!("Make sure the document contains the text '{}'.", phrase),
            content: String::new(),
        });
    }

    findings
}

/// Best-effort table-of-contents placement check: the marker paragraph must
/// carry an explicit center alignment of its own.
pub fn check_toc_placement(candidates: &[TocCandidate]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for candidate in candidates {
        if candidate.alignment == Some(Alignment::Center) {
            continue;
        }

        findings.push(Finding {
            code: Category::TocNotOnNewPage,
            key: candidate.text.clone(),
            message: "Table of contents heading is not centered".to_string(),
            suggestion: "Place the table of contents on its own page with a centered heading."
                .to_string(),
            content: candidate.text.clone(),
        });
    }

    findings
}
