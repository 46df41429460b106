//! Marker-phrase formatting checks
//!
//! Section headings and metadata field labels must be bold and
//! left-aligned wherever they appear.

use template_types::{Alignment, Category, DocumentModel, Paragraph};

use crate::config::ValidationConfig;
use crate::resolve::{effective_alignment, effective_bold};
use crate::rules::Finding;

/// For every configured marker phrase contained in the paragraph text,
/// require effective bold and effective left alignment.
pub fn check_marker_phrases<M: DocumentModel + ?Sized>(
    model: &M,
    paragraph: &Paragraph,
    text: &str,
    config: &ValidationConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for phrase in &config.marker_phrases {
        if !text.contains(phrase.as_str()) {
            continue;
        }

        if !effective_bold(model, paragraph) {
            findings.push(Finding {
                code: Category::BoldError,
                key: phrase.clone(),
                message: format!("Marker text is not bold: '{}'", phrase),
                suggestion: "Make the marker text bold.".to_string(),
                content: text.to_string(),
            });
        }

        if effective_alignment(model, paragraph) != Alignment::Left {
            findings.push(Finding {
                code: Category::AlignmentError,
                key: phrase.clone(),
                message: format!("Marker text must be left-aligned: '{}'", phrase),
                suggestion: "Align the marker text to the left.".to_string(),
                content: text.to_string(),
            });
        }
    }

    findings
}
