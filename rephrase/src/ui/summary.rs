// rephrase/src/ui/summary.rs
//! The replacement summary table printed to stderr after a run.
//!
//! License: MIT OR Apache-2.0

use std::io::Write;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use rephrase_core::ReplacementSummaryItem;

/// Prints the per-rule summary. `sample_limit` caps the example column per
/// rule; `None` shows up to three.
pub fn print_summary(
    summary: &[ReplacementSummaryItem],
    writer: &mut dyn Write,
    use_color: bool,
    sample_limit: Option<usize>,
) -> Result<()> {
    let heading = "--- Replacement Summary ---";
    if use_color {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{}", heading)?;
    }

    if summary.is_empty() {
        writeln!(writer, "No target phrases found.")?;
        return Ok(());
    }

    let limit = sample_limit.unwrap_or(3);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rule", "Occurrences", "Samples"]);

    for item in summary {
        let samples: Vec<String> = item
            .original_texts
            .iter()
            .zip(item.display_texts.iter())
            .take(limit)
            .map(|(original, display)| format!("{} -> {}", original, display))
            .collect();
        table.add_row(vec![
            Cell::new(&item.rule_name),
            Cell::new(item.occurrences),
            Cell::new(samples.join("\n")),
        ]);
    }

    writeln!(writer, "{}", table)?;

    for item in summary {
        writeln!(writer, "{} ({} occurrences)", item.rule_name, item.occurrences)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_rules_and_counts() {
        let summary = vec![ReplacementSummaryItem {
            rule_name: "immigrants".to_string(),
            occurrences: 2,
            original_texts: vec!["migrants".to_string(), "Migrants".to_string()],
            display_texts: vec!["expats".to_string(), "Expats".to_string()],
        }];

        let mut buffer = Vec::new();
        print_summary(&summary, &mut buffer, false, None).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();

        assert!(rendered.contains("--- Replacement Summary ---"));
        assert!(rendered.contains("immigrants (2 occurrences)"));
        assert!(rendered.contains("migrants -> expats"));
    }

    #[test]
    fn test_empty_summary_prints_notice() {
        let mut buffer = Vec::new();
        print_summary(&[], &mut buffer, false, None).unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("No target phrases found."));
    }
}
