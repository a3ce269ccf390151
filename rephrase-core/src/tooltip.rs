// rephrase-core/src/tooltip.rs
//! Tooltip text formatting for replaced spans.
//!
//! Hosts annotate each replaced span with a hover tooltip showing the
//! original wording. The text comes from a small template so hosts can
//! restyle it without touching the engine.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use tinytemplate::TinyTemplate;

/// The default tooltip template, matching the annotation the transform has
/// always shown: the original phrase the reader would otherwise have seen.
pub const DEFAULT_TOOLTIP_FORMAT: &str = "Replaced Phrase: {original}";

/// Renders the tooltip for one replaced span.
///
/// Template placeholders: `{original}`, `{display}`, `{rule}`.
pub fn format_tooltip(
    tooltip_fmt: &str,
    original: &str,
    display: &str,
    rule_name: &str,
) -> Result<String> {
    let mut tt = TinyTemplate::new();
    tt.add_template("t", tooltip_fmt)
        .context("Failed to parse tooltip template")?;
    let ctx = serde_json::json!({
        "original": original,
        "display": display,
        "rule": rule_name,
    });
    tt.render("t", &ctx)
        .map_err(|e| anyhow!("Failed to render tooltip template: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_shows_original() {
        let tooltip =
            format_tooltip(DEFAULT_TOOLTIP_FORMAT, "migrant hotel", "temporary accommodation", "temporary_accommodation")
                .unwrap();
        assert_eq!(tooltip, "Replaced Phrase: migrant hotel");
    }

    #[test]
    fn test_custom_format_with_rule_and_display() {
        let tooltip = format_tooltip("{rule}: {original} -> {display}", "refugee", "person seeking safety", "asylum_seeker")
            .unwrap();
        assert_eq!(tooltip, "asylum_seeker: refugee -> person seeking safety");
    }

    #[test]
    fn test_malformed_template_is_an_error() {
        assert!(format_tooltip("{unclosed", "a", "b", "c").is_err());
    }
}
