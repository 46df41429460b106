//! Effective-property resolution
//!
//! Formatting cascades one level: run overrides beat the paragraph's style,
//! and the style is the only fallback target. Both resolvers are pure
//! functions of the paragraph and the model's style lookup.

use template_types::{Alignment, BoldOverride, DocumentModel, Paragraph};

/// Resolve whether a paragraph renders bold.
///
/// Run overrides are scanned in order. The first explicit `Off` wins over
/// everything else in the paragraph, including runs that are explicitly
/// bold. If no run sets an override, the style decides. A style that exists
/// but declares no bold flag resolves to *bold* — only a missing style (or
/// no style reference at all) resolves to not-bold. That asymmetry matches
/// the source document format, where a bare bold property on a style means
/// "on".
pub fn effective_bold<M: DocumentModel + ?Sized>(model: &M, paragraph: &Paragraph) -> bool {
    let mut any_explicit_bold = false;

    for run in &paragraph.runs {
        match run.bold {
            BoldOverride::Off => return false,
            BoldOverride::On => any_explicit_bold = true,
            BoldOverride::Unset => {}
        }
    }

    if any_explicit_bold {
        return true;
    }

    match paragraph.style_id.as_deref().and_then(|id| model.style(id)) {
        Some(style) => style.bold.unwrap_or(true),
        None => false,
    }
}

/// Resolve the alignment a paragraph renders with.
///
/// An explicit paragraph alignment wins, then the style's declared
/// alignment, then `Left`.
pub fn effective_alignment<M: DocumentModel + ?Sized>(
    model: &M,
    paragraph: &Paragraph,
) -> Alignment {
    if let Some(alignment) = paragraph.alignment {
        return alignment;
    }

    paragraph
        .style_id
        .as_deref()
        .and_then(|id| model.style(id))
        .and_then(|style| style.alignment)
        .unwrap_or(Alignment::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use template_types::{InMemoryDocument, Run, Style};

    fn bold_run(bold: BoldOverride) -> Run {
        Run {
            text: "x".to_string(),
            bold,
            ..Default::default()
        }
    }

    fn styled_paragraph(style_id: &str, runs: Vec<Run>) -> Paragraph {
        Paragraph {
            runs,
            style_id: Some(style_id.to_string()),
            alignment: None,
        }
    }

    #[test]
    fn test_explicit_off_beats_explicit_on() {
        let document = InMemoryDocument::default();
        let paragraph = Paragraph {
            runs: vec![
                bold_run(BoldOverride::On),
                bold_run(BoldOverride::Off),
                bold_run(BoldOverride::On),
            ],
            ..Default::default()
        };
        assert!(!effective_bold(&document, &paragraph));
    }

    #[test]
    fn test_single_on_makes_paragraph_bold() {
        let document = InMemoryDocument::default();
        let paragraph = Paragraph {
            runs: vec![bold_run(BoldOverride::Unset), bold_run(BoldOverride::On)],
            ..Default::default()
        };
        assert!(effective_bold(&document, &paragraph));
    }

    #[test]
    fn test_unset_runs_fall_through_to_style() {
        let document = InMemoryDocument::default().with_style(
            "Heading1",
            Style {
                bold: Some(true),
                alignment: None,
            },
        );
        let paragraph = styled_paragraph("Heading1", vec![bold_run(BoldOverride::Unset)]);
        assert!(effective_bold(&document, &paragraph));
    }

    #[test]
    fn test_style_without_bold_flag_counts_as_bold() {
        let document = InMemoryDocument::default().with_style("Heading1", Style::default());
        let paragraph = styled_paragraph("Heading1", vec![bold_run(BoldOverride::Unset)]);
        assert!(effective_bold(&document, &paragraph));
    }

    #[test]
    fn test_style_with_bold_false_is_not_bold() {
        let document = InMemoryDocument::default().with_style(
            "Body",
            Style {
                bold: Some(false),
                alignment: None,
            },
        );
        let paragraph = styled_paragraph("Body", vec![]);
        assert!(!effective_bold(&document, &paragraph));
    }

    #[test]
    fn test_missing_style_is_not_bold() {
        let document = InMemoryDocument::default();
        assert!(!effective_bold(
            &document,
            &styled_paragraph("Ghost", vec![])
        ));
        assert!(!effective_bold(&document, &Paragraph::default()));
    }

    #[test]
    fn test_explicit_alignment_wins_over_style() {
        let document = InMemoryDocument::default().with_style(
            "Title",
            Style {
                bold: None,
                alignment: Some(Alignment::Center),
            },
        );
        let paragraph = Paragraph {
            runs: vec![],
            style_id: Some("Title".to_string()),
            alignment: Some(Alignment::Left),
        };
        assert_eq!(effective_alignment(&document, &paragraph), Alignment::Left);
    }

    #[test]
    fn test_alignment_falls_back_to_style_then_left() {
        let document = InMemoryDocument::default().with_style(
            "Title",
            Style {
                bold: None,
                alignment: Some(Alignment::Center),
            },
        );
        let styled = styled_paragraph("Title", vec![]);
        assert_eq!(effective_alignment(&document, &styled), Alignment::Center);

        let bare = Paragraph::default();
        assert_eq!(effective_alignment(&document, &bare), Alignment::Left);
    }

    fn arb_override() -> impl Strategy<Value = BoldOverride> {
        prop_oneof![
            Just(BoldOverride::On),
            Just(BoldOverride::Off),
            Just(BoldOverride::Unset),
        ]
    }

    proptest! {
        #[test]
        fn prop_any_off_run_forces_not_bold(overrides in prop::collection::vec(arb_override(), 1..8)) {
            prop_assume!(overrides.contains(&BoldOverride::Off));
            let document = InMemoryDocument::default();
            let paragraph = Paragraph {
                runs: overrides.into_iter().map(bold_run).collect(),
                ..Default::default()
            };
            prop_assert!(!effective_bold(&document, &paragraph));
        }

        #[test]
        fn prop_resolution_is_idempotent(overrides in prop::collection::vec(arb_override(), 0..8)) {
            let document = InMemoryDocument::default();
            let paragraph = Paragraph {
                runs: overrides.into_iter().map(bold_run).collect(),
                ..Default::default()
            };
            let first = effective_bold(&document, &paragraph);
            let second = effective_bold(&document, &paragraph);
            prop_assert_eq!(first, second);
        }
    }
}
