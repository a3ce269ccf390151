// rephrase/src/commands/mod.rs
//! Command implementations and shared plumbing: phrase-table resolution
//! and input reading.
//!
//! License: MIT OR Apache-2.0

pub mod apply;
pub mod scan;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use rephrase_core::PhraseTable;

/// Conventional locations for a user phrase table, probed in order when
/// `--config` is not given.
pub fn table_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".rephrase")),
        dirs::config_dir().map(|p| p.join("rephrase")),
        Some(PathBuf::from("/etc/rephrase")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join("phrases.yaml"))
        .collect()
}

/// Resolves the active phrase table: an explicit `--config` path, else the
/// first existing user table at a conventional location, else the embedded
/// defaults. Enable/disable filters are applied after loading.
pub fn resolve_table(
    config: Option<&Path>,
    enable: &[String],
    disable: &[String],
) -> Result<PhraseTable> {
    let mut table = match config {
        Some(path) => PhraseTable::load_from_file(path)
            .with_context(|| format!("Failed to load phrase table '{}'", path.display()))?,
        None => match table_candidate_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                info!("Using user phrase table at {}.", path.display());
                PhraseTable::load_from_file(&path)
                    .with_context(|| format!("Failed to load phrase table '{}'", path.display()))?
            }
            None => PhraseTable::load_default_rules()?,
        },
    };

    if !enable.is_empty() || !disable.is_empty() {
        table.set_active_rules(enable, disable);
    }

    Ok(table)
}

/// Reads the full input from a file or stdin, stripping ANSI escape
/// sequences so matching sees the text a reader sees.
pub fn read_input(input_file: Option<&Path>) -> Result<String> {
    let raw = match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    Ok(strip_ansi(&raw))
}

/// Strips ANSI escape sequences from a string.
pub fn strip_ansi(s: &str) -> String {
    let cleaned = strip_ansi_escapes::strip(s.as_bytes());
    let stripped = String::from_utf8_lossy(&cleaned).to_string();
    if stripped.len() != s.len() {
        debug!("Stripped {} bytes of ANSI escapes from input.", s.len() - stripped.len());
    }
    stripped
}
