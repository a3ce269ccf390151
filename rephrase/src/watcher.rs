// rephrase/src/watcher.rs
//! The document watcher: an explicit lifecycle component that applies the
//! engine to every text chunk of a document and keeps the transform active
//! as new content arrives.
//!
//! The watcher owns the engine behind the `ReplacementEngine` trait and is
//! driven by the host: `start` runs the initial full pass over a chunk
//! source, `notify_added` handles dynamically inserted content, `stop`
//! deactivates it. Chunk-level idempotence comes from content hashes:
//! a chunk delivered twice (restarted traversal, duplicate mutation
//! notification) is processed once.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;

use anyhow::Result;
use log::{debug, info};
use uuid::Uuid;

use rephrase_core::{canonical_chunk_hash, ReplacementEngine, TextChunk, TextChunkSource};
use rephrase_core::SegmentSink;

/// Counters for one watcher pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchStats {
    /// Chunks offered by the source.
    pub chunks_seen: usize,
    /// Chunks that produced at least one replacement and were materialized.
    pub chunks_transformed: usize,
    /// Total replaced spans materialized.
    pub replacements: usize,
}

/// Watches a document-like structure and keeps phrase replacements applied.
pub struct DocumentWatcher {
    engine: Box<dyn ReplacementEngine>,
    session_id: Uuid,
    processed: HashSet<String>,
    active: bool,
}

impl DocumentWatcher {
    pub fn new(engine: Box<dyn ReplacementEngine>) -> Self {
        Self {
            engine,
            session_id: Uuid::new_v4(),
            processed: HashSet::new(),
            active: false,
        }
    }

    /// Identifier for this watcher's lifetime, used in log correlation.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Runs the initial full pass and activates the watcher.
    ///
    /// The chunk list is collected up front: materializing mutates the
    /// structure, and walking a structure while rewriting it invites
    /// skipped or double-visited nodes.
    pub fn start<D>(&mut self, doc: &mut D) -> Result<WatchStats>
    where
        D: TextChunkSource + SegmentSink,
    {
        self.active = true;
        info!("Watcher session {} starting full pass.", self.session_id);

        let pending: Vec<TextChunk> = doc.chunks().collect();
        let mut stats = WatchStats::default();
        for chunk in &pending {
            stats.chunks_seen += 1;
            let replaced = self.process_chunk(doc, chunk)?;
            if replaced > 0 {
                stats.chunks_transformed += 1;
                stats.replacements += replaced;
            }
        }

        info!(
            "Watcher session {} full pass complete: {}/{} chunks transformed, {} replacements.",
            self.session_id, stats.chunks_transformed, stats.chunks_seen, stats.replacements
        );
        Ok(stats)
    }

    /// Applies the per-chunk pipeline to content added after the initial
    /// pass. Returns whether a materialization happened.
    ///
    /// Notifications arriving while the watcher is inactive are ignored:
    /// hosts may race teardown against late mutation events.
    pub fn notify_added<D>(&mut self, doc: &mut D, added: &TextChunk) -> Result<bool>
    where
        D: SegmentSink,
    {
        if !self.active {
            debug!(
                "Watcher session {} inactive; ignoring added chunk '{}'.",
                self.session_id, added.id
            );
            return Ok(false);
        }
        Ok(self.process_chunk(doc, added)? > 0)
    }

    /// Deactivates the watcher; subsequent notifications are ignored.
    pub fn stop(&mut self) {
        info!("Watcher session {} stopped.", self.session_id);
        self.active = false;
    }

    /// One chunk through the engine: skip if already processed, skip if no
    /// replacements, otherwise hand the segments to the sink. Returns the
    /// number of replaced spans materialized.
    fn process_chunk<D>(&mut self, doc: &mut D, chunk: &TextChunk) -> Result<usize>
    where
        D: SegmentSink,
    {
        let hash = canonical_chunk_hash(&chunk.id, &chunk.text);
        if !self.processed.insert(hash) {
            debug!("Chunk '{}' already processed; skipping.", chunk.id);
            return Ok(0);
        }

        let segments = self.engine.segments(&chunk.text, &chunk.id)?;
        let replaced = segments.iter().filter(|s| s.is_replaced()).count();
        if replaced == 0 {
            return Ok(0);
        }

        doc.materialize(&chunk.id, &segments)?;
        debug!("Chunk '{}': materialized {} replaced spans.", chunk.id, replaced);
        Ok(replaced)
    }
}
