// rephrase-core/src/engines/phrase_engine.rs
//! A `ReplacementEngine` implementation that matches literal phrases with
//! word-boundary, case-insensitive regexes and substitutes them with
//! case-preserved replacement wording.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::sync::mpsc;

use crate::casing::apply_case;
use crate::config::PhraseTable;
use crate::engine::ReplacementEngine;
use crate::patterns::{get_or_compile_rules, CompiledRules};
use crate::phrase_match::{log_phrase_match_debug, PhraseMatch, ReplacementSummaryItem};
use crate::segment::{build_segments, render, Segment};

#[derive(Debug)]
pub struct PhraseEngine {
    compiled_rules: Arc<CompiledRules>,
    table: PhraseTable,
    event_tx: Option<mpsc::Sender<PhraseMatch>>,
}

impl PhraseEngine {
    pub fn new(table: PhraseTable) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&table)
            .context("Failed to compile phrase table for PhraseEngine")?;

        Ok(Self {
            compiled_rules,
            table,
            event_tx: None,
        })
    }

    /// Collects every occurrence of every target phrase, in table-priority
    /// order: patterns are scanned rule-major (rule order, then target
    /// order within the rule), and occurrences of one pattern arrive in
    /// position order from the regex engine.
    fn collect_candidates(&self, content: &str, source_id: &str) -> Vec<PhraseMatch> {
        let mut candidates = Vec::new();

        for pattern in &self.compiled_rules.patterns {
            for found in pattern.regex.find_iter(content) {
                candidates.push(PhraseMatch {
                    rule_name: pattern.rule_name.clone(),
                    original_text: found.as_str().to_string(),
                    replacement_text: pattern.replacement.clone(),
                    start: found.start(),
                    end: found.end(),
                    source_id: source_id.to_string(),
                    timestamp: Some(Utc::now().to_rfc3339()),
                });
            }
        }

        candidates
    }

    /// Greedy first-come-first-kept overlap resolution over candidates in
    /// table-priority order, then an ascending re-sort by start offset.
    ///
    /// Earlier table entries claim spans first, so when two candidates
    /// overlap the one from the earlier rule/target survives — including
    /// same-start ties, which fall to the earlier table entry (the longer
    /// phrase under the table's longest-first ordering). Candidates from a
    /// single pattern never overlap each other, so within one rule this
    /// reduces to keeping every occurrence.
    fn resolve_overlaps(candidates: Vec<PhraseMatch>) -> Vec<PhraseMatch> {
        let mut accepted: Vec<PhraseMatch> = Vec::new();

        for candidate in candidates {
            let has_overlap = accepted.iter().any(|existing| candidate.overlaps(existing));
            if !has_overlap {
                accepted.push(candidate);
            }
        }

        accepted.sort_by_key(|m| m.start);
        accepted
    }

    fn summarize(matches: &[PhraseMatch]) -> Vec<ReplacementSummaryItem> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut summary: Vec<ReplacementSummaryItem> = Vec::new();

        for m in matches {
            let display = apply_case(&m.original_text, &m.replacement_text);
            match index.get(m.rule_name.as_str()) {
                Some(&i) => {
                    summary[i].occurrences += 1;
                    summary[i].original_texts.push(m.original_text.clone());
                    summary[i].display_texts.push(display);
                }
                None => {
                    index.insert(m.rule_name.as_str(), summary.len());
                    summary.push(ReplacementSummaryItem {
                        rule_name: m.rule_name.clone(),
                        occurrences: 1,
                        original_texts: vec![m.original_text.clone()],
                        display_texts: vec![display],
                    });
                }
            }
        }

        summary
    }
}

impl ReplacementEngine for PhraseEngine {
    fn transform(&self, content: &str, source_id: &str) -> Result<(String, Vec<ReplacementSummaryItem>)> {
        let matches = self.find_matches(content, source_id)?;
        let segments = build_segments(content, &matches);
        Ok((render(&segments), Self::summarize(&matches)))
    }

    fn segments(&self, content: &str, source_id: &str) -> Result<Vec<Segment>> {
        let matches = self.find_matches(content, source_id)?;
        Ok(build_segments(content, &matches))
    }

    fn find_matches(&self, content: &str, source_id: &str) -> Result<Vec<PhraseMatch>> {
        if content.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.collect_candidates(content, source_id);
        let accepted = Self::resolve_overlaps(candidates);

        for m in &accepted {
            log_phrase_match_debug(
                module_path!(),
                &m.rule_name,
                &m.original_text,
                &apply_case(&m.original_text, &m.replacement_text),
            );
            if let Some(tx) = &self.event_tx {
                let _ = tx.try_send(m.clone());
            }
        }

        Ok(accepted)
    }

    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Result<Vec<ReplacementSummaryItem>> {
        let matches = self.find_matches(content, source_id)?;
        Ok(Self::summarize(&matches))
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn table(&self) -> &PhraseTable {
        &self.table
    }

    fn set_event_tx(&mut self, tx: mpsc::Sender<PhraseMatch>) {
        self.event_tx = Some(tx);
    }
}
