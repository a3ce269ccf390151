// rephrase-core/src/source.rs
//! The traversal collaborator boundary.
//!
//! The engine never walks a document itself. A host supplies text chunks
//! (one per leaf text-bearing node of whatever hierarchical structure it
//! manages) through [`TextChunkSource`], and receives segment sequences
//! back through [`SegmentSink`] for chunks where replacements occurred.
//! This keeps the engine decoupled from any specific document model or UI
//! framework, and lets tests inject a mock document.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::segment::Segment;

/// One text-bearing leaf of a host document, addressed by a host-chosen id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub id: String,
    pub text: String,
}

impl TextChunk {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// A lazy, finite, restartable sequence of text chunks.
///
/// Each call to `chunks` restarts the traversal over the current state of
/// the structure. Implementations must exclude chunks whose container is
/// non-text (script/style regions) and chunks that were already
/// transformed, so reprocessing a finished document yields no work.
pub trait TextChunkSource {
    fn chunks(&self) -> Box<dyn Iterator<Item = TextChunk> + '_>;
}

/// Receives the engine's output for one chunk and materializes it back
/// into the live structure: plain text runs for Literal segments, annotated
/// inline elements (tooltip bearing the original text) for Replaced
/// segments, each tagged so future traversals skip them.
pub trait SegmentSink {
    fn materialize(&mut self, chunk_id: &str, segments: &[Segment]) -> Result<()>;
}
