//! Title-page centering checks
//!
//! Title-page blocks are recognized by word-sets rather than exact phrases,
//! since line breaking within the block varies between documents.

use template_types::{Alignment, Category, DocumentModel, Paragraph};

use crate::config::ValidationConfig;
use crate::resolve::effective_alignment;
use crate::rules::Finding;

/// A paragraph containing every word of a configured title block must be
/// center-aligned.
pub fn check_title_blocks<M: DocumentModel + ?Sized>(
    model: &M,
    paragraph: &Paragraph,
    text: &str,
    config: &ValidationConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for block in &config.title_blocks {
        if block.words.is_empty() {
            continue;
        }
        if !block.words.iter().all(|word| text.contains(word.as_str())) {
            continue;
        }

        if effective_alignment(model, paragraph) != Alignment::Center {
            findings.push(Finding {
                code: Category::AlignmentError,
                key: text.to_string(),
                message: format!("Title block '{}' must be centered", block.label),
                suggestion: "Center-align the title page block.".to_string(),
                content: text.to_string(),
            });
        }
    }

    findings
}
