// rephrase-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for using the engine in headless mode (no host
//! document, no UI). Provides a helper for a full, one-shot transformation
//! of a string.

use anyhow::Result;

use crate::config::PhraseTable;
use crate::engine::ReplacementEngine;
use crate::engines::phrase_engine::PhraseEngine;

/// Fully transforms an input string by finding and applying all phrase
/// replacements. This function is the primary entry point for
/// non-interactive (headless) use.
///
/// # Arguments
///
/// * `table` - The phrase table to match against (defaults or user-loaded).
/// * `content` - The text to transform.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn rephrase_string(table: PhraseTable, content: &str, source_id: &str) -> Result<String> {
    let engine = PhraseEngine::new(table)?;
    let (transformed, _) = engine.transform(content, source_id)?;
    Ok(transformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhraseRule;
    use anyhow::Result;

    #[test]
    fn test_rephrase_string_with_default_table() -> Result<()> {
        let table = PhraseTable::load_default_rules()?;
        let content = "The economic migrants arrived at the migrant hotel.";

        let transformed = rephrase_string(table, content, "test_input")?;

        let expected =
            "The people seeking work opportunities arrived at the temporary accommodation.";
        assert_eq!(transformed, expected);
        Ok(())
    }

    #[test]
    fn test_rephrase_string_with_custom_table() -> Result<()> {
        let table = PhraseTable {
            rules: vec![PhraseRule {
                name: "greeting".to_string(),
                replacement: "hello".to_string(),
                targets: vec!["hi".to_string()],
                ..Default::default()
            }],
        };

        let transformed = rephrase_string(table, "Hi there, hi again. High time.", "test_input")?;
        assert_eq!(transformed, "Hello there, hello again. High time.");
        Ok(())
    }

    #[test]
    fn test_rephrase_string_empty_input() -> Result<()> {
        let table = PhraseTable::load_default_rules()?;
        assert_eq!(rephrase_string(table, "", "test_input")?, "");
        Ok(())
    }
}
