//! compiler.rs - Manages the compilation and caching of phrase patterns.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `PhraseTable` into `CompiledRules`, which are optimized for efficient
//! matching. It uses a global, shared cache to avoid redundant compilation
//! when hosts process many chunks against the same table.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::RegexBuilder;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{PhraseTable, MAX_PHRASE_LENGTH};
use crate::errors::RephraseError;

/// One target phrase compiled for matching.
///
/// Each (rule, target) pair becomes one pattern: a case-insensitive regex
/// anchored at word boundaries, so `expat` never matches inside
/// `expatriate` and `migrant hotel` never matches inside `migrant hotels`.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The compiled word-boundary regex for one target phrase.
    pub regex: regex::Regex,
    /// The target phrase as declared in the table.
    pub target: String,
    /// The phrase shown in place of a match, before case preservation.
    pub replacement: String,
    /// The owning rule's unique name.
    pub rule_name: String,
}

/// All compiled patterns for a table, flattened in table order.
///
/// Order is the tie-break authority for overlap resolution: patterns appear
/// rule-major, preserving the declared order of rules and of targets within
/// each rule.
#[derive(Debug)]
pub struct CompiledRules {
    pub patterns: Vec<CompiledPattern>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled tables.
    /// The key is a hash of the `PhraseTable` in declared order.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

/// Hashes the `PhraseTable` to create a stable, unique key for the cache.
///
/// Declared order is semantic (it decides which rule survives an overlap),
/// so the rules are hashed in declared order — two tables with the same
/// rules in different order are different tables.
fn hash_table(table: &PhraseTable) -> u64 {
    let mut hasher = DefaultHasher::new();
    table.rules.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a `PhraseTable` into `CompiledRules` for efficient matching.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_rules(table: &PhraseTable) -> Result<CompiledRules, RephraseError> {
    debug!("Starting compilation of {} rules.", table.rules.len());

    let mut patterns = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in &table.rules {
        if let Some(false) = rule.enabled {
            debug!("Skipping disabled rule '{}'.", rule.name);
            continue;
        }
        for target in &rule.targets {
            if target.len() > MAX_PHRASE_LENGTH {
                compilation_errors.push(RephraseError::PhraseLengthExceeded(
                    rule.name.clone(),
                    target.len(),
                    MAX_PHRASE_LENGTH,
                ));
                continue;
            }

            // Target phrases are literal text; escape them and anchor at
            // word boundaries so partial-word occurrences never match.
            let pattern = format!(r"\b{}\b", regex::escape(target));
            let regex_result = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
                .build();

            match regex_result {
                Ok(regex) => {
                    log::debug!(
                        target: "rephrase_core::patterns",
                        "Rule '{}' target '{}' compiled successfully.",
                        &rule.name,
                        target
                    );
                    patterns.push(CompiledPattern {
                        regex,
                        target: target.clone(),
                        replacement: rule.replacement.clone(),
                        rule_name: rule.name.clone(),
                    });
                }
                Err(e) => {
                    compilation_errors.push(RephraseError::PatternCompilationError(
                        target.clone(),
                        rule.name.clone(),
                        e,
                    ));
                }
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(RephraseError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total patterns: {}.", patterns.len());
        Ok(CompiledRules { patterns })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles them if not found.
///
/// This is the public entry point for retrieving compiled rules. It returns an `Arc`
/// to a `CompiledRules` instance, allowing for cheap sharing.
pub fn get_or_compile_rules(table: &PhraseTable) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_table(table);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_RULES_CACHE.read().unwrap();
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    } // Read lock is released here.

    // Not in cache, so we compile.
    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = compile_rules(table)?;
    let compiled_arc = Arc::new(compiled);

    // Acquire a write lock to insert the new rules.
    COMPILED_RULES_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled_arc)
}
