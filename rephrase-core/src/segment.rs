// rephrase-core/src/segment.rs
//! Segment building: turning one text chunk plus its accepted matches into
//! the ordered literal/replaced sequence a host materializes.
//!
//! The segment sequence is the engine's sole output for one input text.
//! Concatenating `original` for Replaced segments plus Literal text
//! reconstructs the input exactly; concatenating `display` plus Literal
//! text yields the transformed text.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::casing::apply_case;
use crate::phrase_match::PhraseMatch;

/// One span of engine output: untouched source text, or a substituted span
/// carrying both the original and the case-preserved display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Literal(String),
    Replaced {
        original: String,
        display: String,
        rule_name: String,
    },
}

impl Segment {
    /// The text a reader sees for this segment.
    pub fn display_text(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Replaced { display, .. } => display,
        }
    }

    /// The source text this segment stands for.
    pub fn original_text(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Replaced { original, .. } => original,
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, Segment::Replaced { .. })
    }
}

/// Walks the accepted matches in ascending start order and emits the
/// literal gaps between them, a Replaced segment per match (display text
/// computed here via [`apply_case`]), and the trailing literal tail. Empty
/// gaps and tails are skipped.
///
/// `matches` must be non-overlapping and sorted ascending by start, which
/// is what the engine's overlap resolution produces.
pub fn build_segments(text: &str, matches: &[PhraseMatch]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0usize;

    for m in matches {
        debug_assert!(m.start >= cursor && m.end <= text.len());
        if m.start > cursor {
            segments.push(Segment::Literal(text[cursor..m.start].to_string()));
        }
        segments.push(Segment::Replaced {
            original: m.original_text.clone(),
            display: apply_case(&m.original_text, &m.replacement_text),
            rule_name: m.rule_name.clone(),
        });
        cursor = m.end;
    }

    if cursor < text.len() {
        segments.push(Segment::Literal(text[cursor..].to_string()));
    }

    segments
}

/// Concatenates display text: the transformed chunk as a plain string.
pub fn render(segments: &[Segment]) -> String {
    segments.iter().map(Segment::display_text).collect()
}

/// Concatenates original text: must reproduce the engine's input exactly.
pub fn reconstruct_original(segments: &[Segment]) -> String {
    segments.iter().map(Segment::original_text).collect()
}
