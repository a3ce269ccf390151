// rephrase/src/ui/output.rs
//! Renders a segment sequence for the terminal.
//!
//! The terminal has no hover, so the tooltip either stays invisible
//! (default) or is appended inline after each replaced span
//! (`--annotate`). When the output is a TTY, replaced spans are
//! highlighted the way the in-page transform marks them.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use owo_colors::OwoColorize;

use rephrase_core::tooltip::format_tooltip;
use rephrase_core::Segment;

/// Rendering options for one apply run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub annotate: bool,
    pub tooltip_format: String,
}

/// Renders segments into one output string.
pub fn render_segments(segments: &[Segment], opts: &RenderOptions) -> Result<String> {
    let mut out = String::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Replaced { original, display, rule_name } => {
                if opts.use_color {
                    out.push_str(&display.yellow().underline().to_string());
                } else {
                    out.push_str(display);
                }

                if opts.annotate {
                    let tooltip = format_tooltip(&opts.tooltip_format, original, display, rule_name)?;
                    let annotation = format!(" [{}]", tooltip);
                    if opts.use_color {
                        out.push_str(&annotation.dimmed().to_string());
                    } else {
                        out.push_str(&annotation);
                    }
                }
            }
        }
    }

    Ok(out)
}
