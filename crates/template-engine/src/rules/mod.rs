//! Rule catalog
//!
//! Each rule is a pure function producing zero or more raw findings; the
//! engine owns traversal order and deduplication. Paragraph rules
//! ([`font`], [`heading`], [`title_block`]) run once per distinct non-empty
//! paragraph; document rules ([`content`]) run once after the traversal.

pub mod content;
pub mod font;
pub mod heading;
pub mod title_block;

use template_types::Category;

/// A raw finding produced by a rule, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub code: Category,

    /// Discriminating value within the category (detected font name,
    /// detected size, matched phrase). Part of the dedup key together with
    /// `code` and `content`.
    pub key: String,

    pub message: String,
    pub suggestion: String,

    /// Paragraph text the finding refers to; empty for document-level
    /// findings.
    pub content: String,
}
