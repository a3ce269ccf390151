// rephrase-core/src/patterns/mod.rs
//! Pattern compilation for the phrase table.
//!
//! License: MIT OR Apache-2.0

pub mod compiler;

pub use compiler::{compile_rules, get_or_compile_rules, CompiledPattern, CompiledRules};
