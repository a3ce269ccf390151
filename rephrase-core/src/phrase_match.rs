// rephrase-core/src/phrase_match.rs
//! Provides core data structures and utility functions for managing phrase
//! matches and per-rule reporting within the `rephrase-core` library.

use log::debug;
use serde::{Deserialize, Serialize};

use hex;
use sha2::{Digest, Sha256};

/// Represents a single occurrence of a target phrase within one chunk of
/// text, tagged with the rule that claimed it.
///
/// Offsets are byte offsets into the source chunk, `start < end`, and
/// always fall on character boundaries because they come from the regex
/// engine. Matches are transient: they are computed per invocation and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PhraseMatch {
    pub rule_name: String,
    /// The matched text exactly as it appears in the source, case intact.
    pub original_text: String,
    /// The rule's replacement phrase, before case preservation is applied.
    pub replacement_text: String,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl PhraseMatch {
    /// True when two spans occupy overlapping byte ranges.
    pub fn overlaps(&self, other: &PhraseMatch) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A summary of all accepted matches for a single rule, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
    pub display_texts: Vec<String>,
}

pub fn log_phrase_match_debug(
    module_path: &str,
    rule_name: &str,
    original_text: &str,
    display_text: &str,
) {
    debug!(
        "{} Found PhraseMatch: Rule='{}', Original='{}', Display='{}'",
        module_path, rule_name, original_text, display_text
    );
}

/// Canonical content hash for a text chunk, used by hosts to recognize
/// chunks they have already processed (re-delivered mutation notifications,
/// restarted traversals).
pub fn canonical_chunk_hash(chunk_id: &str, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(chunk_id.as_bytes());
    hasher.update(b":");
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
