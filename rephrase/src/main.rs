// rephrase/src/main.rs
//! Rephrase entry point.
//!
//! Resolves the phrase table, builds the engine, and dispatches to the
//! selected command.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rephrase::cli::{Cli, Commands};
use rephrase::commands::apply::{run_apply, run_apply_line_buffered, ApplyOptions};
use rephrase::commands::scan::{run_scan, ScanOptions};
use rephrase::commands::{read_input, resolve_table};
use rephrase::logger;
use rephrase_core::{PhraseEngine, DEFAULT_TOOLTIP_FORMAT};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else {
        logger::init_logger(None);
    }

    info!("rephrase started. Version: {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Commands::Apply(cmd) => {
            let table = resolve_table(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
            let engine = PhraseEngine::new(table)?;

            if cmd.line_buffered {
                let mut reader: Box<dyn BufRead> = match &cmd.input_file {
                    Some(path) => Box::new(BufReader::new(File::open(path).with_context(
                        || format!("Failed to open input file '{}'", path.display()),
                    )?)),
                    None => Box::new(io::stdin().lock()),
                };
                let mut writer: Box<dyn io::Write> = match &cmd.output {
                    Some(path) => Box::new(File::create(path).with_context(|| {
                        format!("Failed to create output file '{}'", path.display())
                    })?),
                    None => Box::new(io::stdout().lock()),
                };
                run_apply_line_buffered(&engine, &mut reader, &mut writer)?;
            } else {
                let input = read_input(cmd.input_file.as_deref())?;
                run_apply(
                    &engine,
                    ApplyOptions {
                        input,
                        diff: cmd.diff,
                        annotate: cmd.annotate,
                        tooltip_format: cmd
                            .tooltip_format
                            .unwrap_or_else(|| DEFAULT_TOOLTIP_FORMAT.to_string()),
                        output_path: cmd.output,
                        no_summary: cmd.no_summary,
                        quiet: args.quiet,
                    },
                )?;
            }
        }
        Commands::Scan(cmd) => {
            let table = resolve_table(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
            let engine = PhraseEngine::new(table)?;
            let input = read_input(cmd.input_file.as_deref())?;

            let threshold_exceeded = run_scan(
                &engine,
                ScanOptions {
                    input,
                    json_stdout: cmd.json_stdout,
                    json_file: cmd.json_file,
                    sample_matches: cmd.sample_matches,
                    fail_over_threshold: cmd.fail_over_threshold,
                    quiet: args.quiet,
                },
            )?;

            if threshold_exceeded {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
