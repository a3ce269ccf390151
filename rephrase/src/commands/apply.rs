// rephrase/src/commands/apply.rs
//! Apply command implementation: transform input text and write it out.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use rephrase_core::{engine::ReplacementEngine, render};

use crate::commands::strip_ansi;
use crate::ui::diff_viewer;
use crate::ui::output::{render_segments, RenderOptions};
use crate::ui::summary;

/// Options for one apply run.
pub struct ApplyOptions {
    pub input: String,
    pub diff: bool,
    pub annotate: bool,
    pub tooltip_format: String,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

/// The main operation runner for `rephrase apply`.
pub fn run_apply(engine: &dyn ReplacementEngine, opts: ApplyOptions) -> Result<()> {
    info!("Starting apply operation.");

    let segments = engine
        .segments(&opts.input, "cli-input")
        .context("Transformation failed")?;

    debug!(
        "Content transformed. Original length: {}, {} segments.",
        opts.input.len(),
        segments.len()
    );

    handle_primary_output(&opts, &segments)?;
    handle_replacement_summary(engine, &opts)?;

    info!("Apply operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &ApplyOptions, segments: &[rephrase_core::Segment]) -> Result<()> {
    if let Some(path) = opts.output_path.clone() {
        info!("Writing transformed content to file: {}", path.display());
        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        if opts.diff {
            diff_viewer::print_diff(&opts.input, &render(segments), &mut file, false)?;
        } else {
            let render_opts = RenderOptions {
                use_color: false,
                annotate: opts.annotate,
                tooltip_format: opts.tooltip_format.clone(),
            };
            writeln!(file, "{}", render_segments(segments, &render_opts)?)?;
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();

        if opts.diff {
            diff_viewer::print_diff(&opts.input, &render(segments), &mut writer, supports_color)?;
        } else {
            debug!("Writing transformed content to stdout.");
            let render_opts = RenderOptions {
                use_color: supports_color,
                annotate: opts.annotate,
                tooltip_format: opts.tooltip_format.clone(),
            };
            writeln!(writer, "{}", render_segments(segments, &render_opts)?)?;
        }
    }
    Ok(())
}

fn handle_replacement_summary(engine: &dyn ReplacementEngine, opts: &ApplyOptions) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        debug!("Displaying replacement summary.");
        let report = engine.analyze_for_stats(&opts.input, "cli-input")?;
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(&report, &mut io::stderr(), stderr_supports_color, None)?;
    }
    Ok(())
}

/// Transforms a single line, swallowing errors: a line the engine cannot
/// process passes through unchanged.
pub fn apply_single_line(line: &str, engine: &dyn ReplacementEngine) -> String {
    let stripped = strip_ansi(line);
    engine
        .transform(&stripped, "cli-line")
        .map(|(transformed, _)| transformed)
        .unwrap_or(stripped)
}

/// Streaming mode for pipes: each input line is transformed and flushed
/// immediately.
pub fn run_apply_line_buffered(
    engine: &dyn ReplacementEngine,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<()> {
    info!("Starting line-buffered apply operation.");
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        writeln!(writer, "{}", apply_single_line(&line, engine))?;
        writer.flush()?;
    }
    Ok(())
}
