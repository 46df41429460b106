//! Run-level font family and font size checks

use template_types::{Category, Paragraph};

use crate::config::ValidationConfig;
use crate::rules::Finding;

/// Flag every run whose font family differs (case-insensitively) from the
/// required family. Runs without a family inherit it and are not checked.
pub fn check_font_family(
    paragraph: &Paragraph,
    text: &str,
    config: &ValidationConfig,
) -> Vec<Finding> {
    let required = config.required_font_family.to_lowercase();
    let mut findings = Vec::new();

    for run in &paragraph.runs {
        let Some(family) = run.font_family.as_deref() else {
            continue;
        };
        if family.is_empty() || family.to_lowercase() == required {
            continue;
        }

        findings.push(Finding {
            code: Category::FontMismatch,
            key: family.to_string(),
            message: format!("Unexpected font family: {}", family),
            suggestion: format!("Set the font to '{}'.", config.required_font_family),
            content: text.to_string(),
        });
    }

    findings
}

/// Flag every run whose explicit size falls outside the configured policy.
pub fn check_font_size(
    paragraph: &Paragraph,
    text: &str,
    config: &ValidationConfig,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for run in &paragraph.runs {
        let Some(size) = run.font_size else {
            continue;
        };
        if config.font_size_policy.permits(size) {
            continue;
        }

        findings.push(Finding {
            code: Category::FontSizeMismatch,
            key: size.to_string(),
            message: format!("Unexpected font size: {}", size),
            suggestion: format!(
                "Set the font size to {}.",
                config.font_size_policy.describe()
            ),
            content: text.to_string(),
        });
    }

    findings
}
