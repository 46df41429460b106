pub mod document;
pub mod report;

pub use document::{
    Alignment, BoldOverride, DocumentModel, InMemoryDocument, ModelError, Paragraph, Run, Style,
};
pub use report::{Category, ValidationMessage, ValidationReport, ValidationStats};
