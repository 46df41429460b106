//! Template conformance validation engine
//!
//! Checks a structured document (paragraphs of styled runs with one-level
//! style inheritance) against a configurable set of formatting and content
//! conventions, and produces a deduplicated, categorized report with
//! aggregate statistics.
//!
//! The engine consumes an abstract [`DocumentModel`]; container parsing,
//! transport and report rendering live elsewhere.

mod accumulator;
pub mod config;
pub mod resolve;
pub mod rules;

use thiserror::Error;
use tracing::debug;

use template_types::{DocumentModel, ModelError, ValidationReport};

use crate::accumulator::FindingAccumulator;
use crate::rules::content::{self, TocCandidate};
use crate::rules::{font, heading, title_block};

pub use config::{FontSizePolicy, TitleBlock, ValidationConfig};
pub use template_types::{Category, ValidationMessage, ValidationStats};

/// Engine-level failure. Rule violations are never errors; only a broken
/// document model aborts a run.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("document model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),
}

/// Conformance validation engine.
///
/// Holds only configuration; every [`validate`](TemplateEngine::validate)
/// call runs with fresh accumulator state, so one engine value can check
/// any number of documents without cross-document leakage.
pub struct TemplateEngine {
    config: ValidationConfig,
}

impl TemplateEngine {
    /// Engine with the built-in thesis-template conventions.
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one document and assemble the report.
    ///
    /// Paragraphs are traversed once in order. Empty texts and repeats of
    /// already-seen texts are skipped before any rule runs; document-level
    /// checks run once afterwards over the accumulated state.
    pub fn validate<M: DocumentModel + ?Sized>(
        &self,
        model: &M,
    ) -> Result<ValidationReport, EngineError> {
        let paragraphs = model.paragraphs()?;
        debug!(paragraphs = paragraphs.len(), "validating document");

        let mut acc = FindingAccumulator::new();
        let mut document_text = String::new();
        let mut toc_candidates: Vec<TocCandidate> = Vec::new();

        for paragraph in paragraphs {
            let text = paragraph.text();

            // The TOC check covers every paragraph, repeats included: a
            // later occurrence may carry a different direct alignment.
            // Identical candidates collapse in finding-key dedup.
            if text.contains(self.config.toc_marker.as_str()) {
                toc_candidates.push(TocCandidate {
                    text: text.clone(),
                    alignment: paragraph.alignment,
                });
            }

            if !acc.admit_paragraph(&text) {
                continue;
            }

            document_text.push_str(&text);
            document_text.push('\n');

            for finding in font::check_font_family(paragraph, &text, &self.config) {
                acc.record(finding);
            }
            for finding in font::check_font_size(paragraph, &text, &self.config) {
                acc.record(finding);
            }
            for finding in heading::check_marker_phrases(model, paragraph, &text, &self.config) {
                acc.record(finding);
            }
            for finding in title_block::check_title_blocks(model, paragraph, &text, &self.config) {
                acc.record(finding);
            }
        }

        for finding in content::check_required_phrases(&document_text, &self.config) {
            acc.record(finding);
        }
        for finding in content::check_toc_placement(&toc_candidates) {
            acc.record(finding);
        }

        let report = acc.into_report();
        debug!(
            findings = report.stats.total_errors,
            paragraphs = report.stats.total_paragraphs,
            "validation complete"
        );
        Ok(report)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_types::{InMemoryDocument, Paragraph, Run};

    struct BrokenModel;

    impl DocumentModel for BrokenModel {
        fn paragraphs(&self) -> Result<&[Paragraph], ModelError> {
            Err(ModelError::Unavailable("stream closed".to_string()))
        }

        fn style(&self, _style_id: &str) -> Option<&template_types::Style> {
            None
        }
    }

    #[test]
    fn test_broken_model_produces_no_report() {
        let engine = TemplateEngine::new();
        let err = engine.validate(&BrokenModel).unwrap_err();
        assert!(matches!(err, EngineError::ModelUnavailable(_)));
    }

    #[test]
    fn test_empty_paragraphs_are_skipped_entirely() {
        let engine = TemplateEngine::new();
        let document = InMemoryDocument::new(vec![
            Paragraph::default(),
            Paragraph {
                runs: vec![Run {
                    text: "   ".to_string(),
                    font_family: Some("Arial".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ]);

        let report = engine.validate(&document).unwrap();
        assert_eq!(report.stats.total_paragraphs, 0);
        // Whitespace-only paragraphs never reach the font rule.
        assert!(report
            .messages
            .iter()
            .all(|m| m.code != Category::FontMismatch));
    }
}
