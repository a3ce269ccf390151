// rephrase/src/cli.rs
//! This file defines the command-line interface (CLI) for the rephrase
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rephrase",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rephrase charged wording in rendered text",
    long_about = "Rephrase is a command-line utility for substituting configured phrases in text \
with alternative wording while preserving letter case, annotating each substitution with the \
original phrase. It applies an ordered phrase table with word-boundary, case-insensitive \
matching, and resolves overlapping matches deterministically in favor of the most specific \
phrase.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'rephrase' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `rephrase` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transforms an input file or stdin, substituting configured phrases.
    #[command(about = "Transforms an input file or stdin, substituting configured phrases.")]
    Apply(ApplyCommand),

    /// Scans an input for target phrases and provides a detailed summary without transforming.
    #[command(about = "Scans an input for target phrases and provides a detailed summary without transforming.")]
    Scan(ScanCommand),
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write transformed output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Path to a custom phrase table (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom phrase table (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable only these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable only these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,

    /// Append the tooltip annotation after each replaced span.
    #[arg(long = "annotate", help = "Append the tooltip annotation (original phrase) after each replaced span.")]
    pub annotate: bool,

    /// Template for the tooltip annotation text.
    #[arg(long = "tooltip-format", value_name = "TEMPLATE", help = "Template for the tooltip text; placeholders: {original}, {display}, {rule}.")]
    pub tooltip_format: Option<String>,

    /// Suppress the replacement summary.
    #[arg(long = "no-summary", help = "Suppress the replacement summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom phrase table (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom phrase table (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable only these rule names (comma-separated).
    #[arg(long = "enable", short = 'e', value_delimiter = ',', help = "Explicitly enable only these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long = "disable", short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Exit with a non-zero code if the total number of matches exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of matches exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export scan summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the replacement statistics to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print scan summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the replacement statistics to stdout as JSON.")]
    pub json_stdout: bool,

    /// Limit the number of unique sample matches displayed per rule in console output.
    #[arg(long = "sample-matches", value_name = "N", help = "Display a sample of up to N matches per rule in the console output.")]
    pub sample_matches: Option<usize>,
}
