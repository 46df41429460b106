//! Example: validate a small in-memory document
//!
//! Builds a document with a handful of deliberate formatting problems,
//! runs the engine with the built-in conventions, and prints the report.
//!
//! Run with:
//!   cargo run --example validate_document -p template-engine

use template_engine::{TemplateEngine, ValidationConfig};
use template_types::{Alignment, BoldOverride, InMemoryDocument, Paragraph, Run, Style};

fn main() {
    let document = InMemoryDocument::new(vec![
        // Section heading, correctly bold and left-aligned.
        Paragraph {
            runs: vec![Run {
                text: "ВВЕДЕНИЕ".to_string(),
                bold: BoldOverride::On,
                ..Default::default()
            }],
            style_id: None,
            alignment: Some(Alignment::Left),
        },
        // Body text in the wrong font and size.
        Paragraph {
            runs: vec![Run {
                text: "Основной текст работы.".to_string(),
                font_family: Some("Arial".to_string()),
                font_size: Some(16),
                ..Default::default()
            }],
            ..Default::default()
        },
        // Conclusion heading whose style is centered instead of left.
        Paragraph {
            runs: vec![Run {
                text: "ЗАКЛЮЧЕНИЕ".to_string(),
                ..Default::default()
            }],
            style_id: Some("Heading1".to_string()),
            alignment: None,
        },
    ])
    .with_style(
        "Heading1",
        Style {
            bold: Some(true),
            alignment: Some(Alignment::Center),
        },
    );

    // Check only the phrases this sample is expected to contain.
    let config = ValidationConfig {
        required_phrases: vec!["ВВЕДЕНИЕ".to_string(), "ЗАКЛЮЧЕНИЕ".to_string()],
        ..Default::default()
    };

    let engine = TemplateEngine::with_config(config);
    let report = match engine.validate(&document) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("✗ Validation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Template Validation Report");
    println!("{}", "=".repeat(60));
    for message in &report.messages {
        println!("[{}] {}", message.code, message.message);
        println!("    Suggestion: {}", message.suggestion);
        if !message.content.is_empty() {
            println!("    Context: {}", message.content);
        }
    }
    println!();
    println!(
        "Paragraphs checked: {}, findings: {}",
        report.stats.total_paragraphs, report.stats.total_errors
    );
    println!();
    println!("JSON form:");
    match report.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("✗ Failed to serialize report: {}", e),
    }
}
