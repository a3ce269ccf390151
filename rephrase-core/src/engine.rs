// rephrase-core/src/engine.rs
//! Defines the core ReplacementEngine trait and related data structures.
//!
//! The `ReplacementEngine` trait provides a pluggable interface for
//! phrase-replacement strategies. This module defines the contract that all
//! such engines must adhere to, ensuring a consistent and interchangeable
//! core API for hosts.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use tokio::sync::mpsc;

use crate::config::PhraseTable;
use crate::patterns::CompiledRules;
use crate::phrase_match::{PhraseMatch, ReplacementSummaryItem};
use crate::segment::Segment;

/// A trait that defines the core functionality of a replacement engine.
///
/// This trait decouples host applications (document walkers, CLIs) from the
/// specific matching strategy, allowing different engines to be used
/// interchangeably. Implementations are pure functions of (text, table):
/// reprocessing identical text yields identical output, and absent or empty
/// input yields an empty result rather than an error.
pub trait ReplacementEngine: Send + Sync {
    /// Performs the full pipeline on one chunk of text: find matches,
    /// resolve overlaps, build segments, and render the transformed text.
    ///
    /// Returns the transformed content and a per-rule summary of all
    /// accepted replacements.
    ///
    /// # Arguments
    /// * `content` - The input text chunk.
    /// * `source_id` - The identifier of the chunk being processed.
    fn transform(&self, content: &str, source_id: &str) -> Result<(String, Vec<ReplacementSummaryItem>)>;

    /// Produces the ordered segment sequence for one chunk of text.
    ///
    /// This is the primary output for hosts that materialize replacements
    /// back into a live structure (text runs for Literal segments,
    /// annotated inline elements for Replaced segments). A chunk with no
    /// matches yields a single Literal segment (or none for empty input).
    fn segments(&self, content: &str, source_id: &str) -> Result<Vec<Segment>>;

    /// Finds all accepted (non-overlapping) matches in one chunk, sorted
    /// ascending by start offset. Intended for UIs and reporting.
    fn find_matches(&self, content: &str, source_id: &str) -> Result<Vec<PhraseMatch>>;

    /// Scans the provided content without transforming it.
    ///
    /// Returns a summary of all accepted matches; the content itself is
    /// not modified. Used for stats-only operation.
    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Result<Vec<ReplacementSummaryItem>>;

    /// Returns a reference to the `CompiledRules` used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's phrase table.
    fn table(&self) -> &PhraseTable;

    /// Sets an observer channel that receives every accepted match.
    ///
    /// Sends are best-effort (`try_send`) and never block the engine; a
    /// full or closed channel drops the event.
    fn set_event_tx(&mut self, tx: mpsc::Sender<PhraseMatch>);
}
