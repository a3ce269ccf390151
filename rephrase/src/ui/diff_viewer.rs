// rephrase/src/ui/diff_viewer.rs
//! Unified diff between the original and transformed text, for `--diff`.
//!
//! License: MIT OR Apache-2.0

use std::io::Write;

use anyhow::Result;
use diffy::create_patch;
use owo_colors::OwoColorize;

/// Writes a unified diff of `original` vs `transformed`.
pub fn print_diff(
    original: &str,
    transformed: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> Result<()> {
    let patch = create_patch(original, transformed);

    if !use_color {
        write!(writer, "{}", patch)?;
        return Ok(());
    }

    for line in patch.to_string().lines() {
        if line.starts_with('+') && !line.starts_with("+++") {
            writeln!(writer, "{}", line.green())?;
        } else if line.starts_with('-') && !line.starts_with("---") {
            writeln!(writer, "{}", line.red())?;
        } else {
            writeln!(writer, "{}", line)?;
        }
    }

    Ok(())
}
