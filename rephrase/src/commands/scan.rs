// rephrase/src/commands/scan.rs
//! Scan command implementation: report target-phrase occurrences without
//! transforming the input.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use is_terminal::IsTerminal;
use log::{info, warn};
use serde::Serialize;
use uuid::Uuid;

use rephrase_core::{engine::ReplacementEngine, ReplacementSummaryItem};

use crate::ui::summary;

/// Options for one scan run.
pub struct ScanOptions {
    pub input: String,
    pub json_stdout: bool,
    pub json_file: Option<PathBuf>,
    pub sample_matches: Option<usize>,
    pub fail_over_threshold: Option<usize>,
    pub quiet: bool,
}

/// The JSON report emitted by `--json-stdout` / `--json-file`.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub generated_at: String,
    pub run_id: String,
    pub total_occurrences: usize,
    pub rules: Vec<ReplacementSummaryItem>,
}

/// Runs the scan. Returns `true` when `--fail-over-threshold` was given
/// and exceeded, so the caller can map it to a non-zero exit code.
pub fn run_scan(engine: &dyn ReplacementEngine, opts: ScanOptions) -> Result<bool> {
    info!("Starting scan operation.");

    let rules = engine.analyze_for_stats(&opts.input, "cli-input")?;
    let total_occurrences: usize = rules.iter().map(|item| item.occurrences).sum();

    if opts.json_stdout || opts.json_file.is_some() {
        let report = ScanReport {
            generated_at: Utc::now().to_rfc3339(),
            run_id: Uuid::new_v4().to_string(),
            total_occurrences,
            rules,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .context("Failed to serialize scan report")?;

        if let Some(path) = &opts.json_file {
            info!("Writing scan report to file: {}", path.display());
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write scan report to '{}'", path.display()))?;
        } else {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", rendered)?;
        }
    } else if !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(
            &rules,
            &mut io::stderr(),
            stderr_supports_color,
            opts.sample_matches,
        )?;
    }

    info!("Scan operation completed. Total occurrences: {}.", total_occurrences);

    if let Some(threshold) = opts.fail_over_threshold {
        if total_occurrences > threshold {
            warn!(
                "Occurrence count {} exceeds fail-over threshold {}.",
                total_occurrences, threshold
            );
            return Ok(true);
        }
    }

    Ok(false)
}
