//! Configuration management for `rephrase-core`.
//!
//! This module defines the phrase table: the ordered list of replacement
//! rules the engine matches against. It handles serialization and
//! deserialization of YAML tables and provides utilities for loading and
//! validating them.
//!
//! Order is semantic: rules are matched in declared order, and the earlier
//! rule wins when two matches overlap. Tables therefore list the
//! most-specific/longest target phrases first.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed byte length for a single target phrase.
pub const MAX_PHRASE_LENGTH: usize = 120;

/// Target phrases are matched literally; a rule author reaching for regex
/// syntax will silently get escaped characters instead, so we warn on it.
static METACHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\\^$.|?*+()\[\]{}]").unwrap());

/// A single replacement rule: one replacement phrase and the ordered list
/// of target phrases it substitutes for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct PhraseRule {
    /// Unique identifier for the rule (e.g., "migrant_hotel").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The phrase shown in place of any matched target.
    pub replacement: String,
    /// Target phrases, in priority order. Matched case-insensitively at
    /// word boundaries.
    pub targets: Vec<String>,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
    /// Metadata tags for categorization.
    pub tags: Option<Vec<String>>,
}

impl Default for PhraseRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            replacement: String::new(),
            targets: Vec::new(),
            enabled: None,
            tags: None,
        }
    }
}

/// The top-level phrase table: an ordered sequence of rules.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PhraseTable {
    pub rules: Vec<PhraseRule>,
}

impl PhraseTable {
    /// Loads a phrase table from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom phrase table from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read phrase table {}", path.display()))?;
        let table: PhraseTable = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse phrase table {}", path.display()))?;

        validate_rules(&table.rules)?;
        info!("Loaded {} rules from file {}.", table.rules.len(), path.display());

        Ok(table)
    }

    /// Loads the built-in phrase table from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default phrase table from embedded string...");
        let default_yaml = include_str!("../config/default_phrases.yaml");
        let table: PhraseTable = serde_yml::from_str(default_yaml)
            .context("Failed to parse default phrase table")?;

        validate_rules(&table.rules)?;
        debug!("Loaded {} default rules.", table.rules.len());
        Ok(table)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    ///
    /// Relative order of the surviving rules is preserved; only membership
    /// changes.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            if disable_set.contains(rule_name_str) {
                return false;
            }
            if !enable_set.is_empty() && !enable_set.contains(rule_name_str) {
                return false;
            }
            rule.enabled.unwrap_or(true)
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Validates table integrity (names, replacements, targets).
///
/// All problems are collected into a single error so a misconfigured table
/// fails at startup with a complete report instead of one complaint per run.
pub fn validate_rules(rules: &[PhraseRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.replacement.trim().is_empty() {
            errors.push(format!("Rule '{}' has an empty `replacement` field.", rule.name));
        }

        if rule.targets.is_empty() {
            errors.push(format!("Rule '{}' has an empty `targets` list.", rule.name));
        }

        for target in &rule.targets {
            if target.trim().is_empty() {
                errors.push(format!("Rule '{}' contains an empty target phrase.", rule.name));
                continue;
            }
            if target.len() > MAX_PHRASE_LENGTH {
                errors.push(format!(
                    "Rule '{}': target phrase length ({}) exceeds maximum allowed ({}).",
                    rule.name,
                    target.len(),
                    MAX_PHRASE_LENGTH
                ));
            }
            if METACHAR_RE.is_match(target) {
                warn!(
                    "Rule '{}': target '{}' contains regex metacharacters; they are matched literally.",
                    rule.name, target
                );
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Phrase table validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
