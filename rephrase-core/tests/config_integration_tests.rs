// rephrase-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

// Import the specific types and functions needed from the main crate's config module
use rephrase_core::config::{validate_rules, PhraseRule, PhraseTable};

#[test]
fn test_load_default_rules() {
    let table = PhraseTable::load_default_rules().unwrap();
    assert!(!table.rules.is_empty());
    assert!(table.rules.iter().any(|r| r.name == "temporary_accommodation"));

    // The hotel/shelter group is declared first so its long phrases win
    // overlaps against the shorter phrases later entries contain.
    assert_eq!(table.rules[0].name, "temporary_accommodation");
    assert_eq!(table.rules.last().unwrap().name, "immigrant");
}

#[test]
fn test_default_rules_preserve_target_order() {
    let table = PhraseTable::load_default_rules().unwrap();
    let hotel_rule = table
        .rules
        .iter()
        .find(|r| r.name == "temporary_accommodation")
        .unwrap();
    assert_eq!(hotel_rule.targets.first().unwrap(), "migrant hotel");
    assert_eq!(hotel_rule.targets.last().unwrap(), "migrant shelters");
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: test_rule
    replacement: "waterway"
    targets:
      - "canal"
      - "ditch"
    description: "A test rule"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let table = PhraseTable::load_from_file(file.path())?;
    assert_eq!(table.rules.len(), 1);
    assert_eq!(table.rules[0].name, "test_rule");
    assert_eq!(table.rules[0].replacement, "waterway");
    assert_eq!(table.rules[0].targets, vec!["canal".to_string(), "ditch".to_string()]);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_empty_targets() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: no_targets
    replacement: "something"
    targets: []
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(PhraseTable::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_file_rejects_empty_replacement() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: no_replacement
    replacement: ""
    targets:
      - "orphan"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(PhraseTable::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_validate_rejects_duplicate_names() {
    let rules = vec![
        PhraseRule {
            name: "dup".to_string(),
            replacement: "a".to_string(),
            targets: vec!["one".to_string()],
            ..Default::default()
        },
        PhraseRule {
            name: "dup".to_string(),
            replacement: "b".to_string(),
            targets: vec!["two".to_string()],
            ..Default::default()
        },
    ];
    assert!(validate_rules(&rules).is_err());
}

#[test]
fn test_validate_collects_all_errors() {
    let rules = vec![
        PhraseRule {
            name: String::new(),
            replacement: String::new(),
            targets: vec![],
            ..Default::default()
        },
    ];
    let err = validate_rules(&rules).unwrap_err().to_string();
    assert!(err.contains("empty `name`"));
    assert!(err.contains("empty `replacement`"));
    assert!(err.contains("empty `targets`"));
}

#[test]
fn test_set_active_rules_disables_by_name() {
    let mut table = PhraseTable::load_default_rules().unwrap();
    let before = table.rules.len();
    table.set_active_rules(&[], &["immigrants".to_string(), "immigrant".to_string()]);
    assert_eq!(table.rules.len(), before - 2);
    assert!(!table.rules.iter().any(|r| r.name.starts_with("immigrant")));
}

#[test]
fn test_set_active_rules_enable_list_is_an_allowlist() {
    let mut table = PhraseTable::load_default_rules().unwrap();
    table.set_active_rules(&["asylum_seekers".to_string()], &[]);
    assert_eq!(table.rules.len(), 1);
    assert_eq!(table.rules[0].name, "asylum_seekers");
}

#[test]
fn test_set_active_rules_preserves_declared_order() {
    let mut table = PhraseTable::load_default_rules().unwrap();
    table.set_active_rules(&[], &["economic_migrant".to_string()]);
    let names: Vec<&str> = table.rules.iter().map(|r| r.name.as_str()).collect();
    let pos_hotels = names.iter().position(|n| *n == "temporary_accommodation").unwrap();
    let pos_expats = names.iter().position(|n| *n == "immigrants").unwrap();
    assert!(pos_hotels < pos_expats);
}
