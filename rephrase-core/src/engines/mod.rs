// rephrase-core/src/engines/mod.rs
//! Concrete implementations of the `ReplacementEngine` trait.
//!
//! License: MIT OR Apache-2.0

pub mod phrase_engine;

pub use phrase_engine::PhraseEngine;
