// rephrase-core/src/lib.rs
//! # Rephrase Core Library
//!
//! `rephrase-core` provides the fundamental, host-independent logic for
//! scanning rendered text and substituting configured phrases with
//! alternative wording. It defines the core data structures for phrase
//! rules, provides mechanisms for compiling them into matchable patterns,
//! and implements a pluggable `ReplacementEngine` trait for applying the
//! replacement logic.
//!
//! The library is designed to be pure and stateless, focusing solely on
//! the transformation of input text based on a declared phrase table,
//! without concerns for document traversal or application-specific state
//! management. Hosts walk their own document structure, hand the engine
//! one text chunk at a time, and materialize the resulting segments.
//!
//! ## Modules
//!
//! * `config`: Defines `PhraseRule`s and the `PhraseTable` priority-ordered rule list.
//! * `patterns`: Compiles target phrases into cached word-boundary regexes.
//! * `casing`: Case-preserving substitution (`apply_case`).
//! * `phrase_match`: Data structures for matches, summaries, and chunk hashing.
//! * `segment`: The literal/replaced segment sequence and its builder.
//! * `engine`: The `ReplacementEngine` trait, enabling a modular design.
//! * `engines`: Concrete implementations of the `ReplacementEngine` trait.
//! * `source`: Collaborator traits for chunk traversal and materialization.
//! * `tooltip`: Template-driven hover-annotation text.
//! * `headless`: Convenience wrapper for one-shot, non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust
//! use rephrase_core::{PhraseTable, rephrase_string};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the built-in phrase table.
//!     let table = PhraseTable::load_default_rules()?;
//!
//!     // 2. Transform some rendered text in one call.
//!     let input = "The economic migrants arrived at the migrant hotel.";
//!     let output = rephrase_string(table, input, "example.txt")?;
//!
//!     assert_eq!(
//!         output,
//!         "The people seeking work opportunities arrived at the temporary accommodation."
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines a
//! structured `RephraseError` for programmatic handling. Malformed phrase
//! tables are rejected at construction time so call sites fail fast during
//! startup; absent or empty input text is "no matches", never an error.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `ReplacementEngine` trait allows
//!   different matching strategies to be swapped out seamlessly.
//! * **Stateless:** The engine is a pure function of (text, table);
//!   reprocessing identical text yields identical segments.
//! * **Testable:** Logic is easily unit-testable in isolation; traversal
//!   is behind traits so tests inject mock documents.
//! * **Order-Preserving:** The phrase table's declared order is the
//!   priority authority for overlap resolution and survives loading,
//!   compilation, and iteration.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod casing;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod patterns;
pub mod phrase_match;
pub mod segment;
pub mod source;
pub mod tooltip;

/// Re-exports the public configuration types and functions for managing the phrase table.
pub use config::{validate_rules, PhraseRule, PhraseTable, MAX_PHRASE_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RephraseError;

/// Re-exports the case-preserving substitution function.
pub use casing::apply_case;

/// Re-exports types related to the core replacement engine trait.
pub use engine::ReplacementEngine;

/// Re-exports the concrete `PhraseEngine` implementation.
pub use engines::phrase_engine::PhraseEngine;

/// Re-exports types for matches and per-rule reporting.
pub use phrase_match::{canonical_chunk_hash, PhraseMatch, ReplacementSummaryItem};

/// Re-exports the segment sequence types and helpers.
pub use segment::{build_segments, reconstruct_original, render, Segment};

/// Re-exports the collaborator traits for document traversal.
pub use source::{SegmentSink, TextChunk, TextChunkSource};

/// Re-exports tooltip formatting for replaced-span annotations.
pub use tooltip::{format_tooltip, DEFAULT_TOOLTIP_FORMAT};

/// Re-exports the one-shot, non-interactive entry point.
pub use headless::rephrase_string;

// Re-export key types from the patterns::compiler module for advanced usage.
pub use patterns::compiler::{compile_rules, CompiledPattern, CompiledRules};
