// rephrase/tests/cli_integration_tests.rs
//! Command-line integration tests for the `rephrase` binary.
//!
//! These tests execute the real executable with `assert_cmd`, feeding
//! input via stdin or temp files and asserting on stdout/stderr. ANSI
//! escape codes are stripped before comparison since colored output
//! depends on the terminal.

use anyhow::Result;
#[allow(unused_imports)]
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(unused_imports)]
use assert_cmd::prelude::*;
use assert_cmd::Command;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

/// Runs the `rephrase` binary with the given stdin input and arguments.
fn run_rephrase_command(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("rephrase").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

/// Strips ANSI escape codes for plain-text comparison.
fn strip_ansi(s: &str) -> String {
    let cleaned = strip_ansi_escapes_fn(s);
    String::from_utf8_lossy(&cleaned).to_string()
}

#[test]
fn test_basic_apply() -> Result<()> {
    let input = "The economic migrants arrived at the migrant hotel.";
    let expected_stdout =
        "The people seeking work opportunities arrived at the temporary accommodation.\n";

    let assert_result = run_rephrase_command(input, &["apply"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    let stderr = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stderr));

    assert_eq!(stdout, expected_stdout);
    assert!(stderr.contains("--- Replacement Summary ---"), "stderr:\n{}", stderr);
    assert!(stderr.contains("economic_migrants (1 occurrences)"), "stderr:\n{}", stderr);
    assert!(stderr.contains("temporary_accommodation (1 occurrences)"), "stderr:\n{}", stderr);
    Ok(())
}

#[test]
fn test_apply_preserves_case() -> Result<()> {
    let assert_result = run_rephrase_command("REFUGEE, refugee, Refugee.", &["apply", "--no-summary"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert_eq!(stdout, "PERSON SEEKING SAFETY, person seeking safety, Person seeking safety.\n");
    Ok(())
}

#[test]
fn test_apply_respects_word_boundaries() -> Result<()> {
    let input = "The expatriate community.";
    let assert_result = run_rephrase_command(input, &["apply", "--no-summary"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert_eq!(stdout, "The expatriate community.\n");
    Ok(())
}

#[test]
fn test_apply_with_annotation() -> Result<()> {
    let input = "the migrant hotel";
    let assert_result = run_rephrase_command(input, &["apply", "--annotate", "--no-summary"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert_eq!(stdout, "the temporary accommodation [Replaced Phrase: migrant hotel]\n");
    Ok(())
}

#[test]
fn test_apply_with_custom_config() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: waterway
    replacement: "canal"
    targets:
      - "ditch"
"#;
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(yaml_content.as_bytes())?;
    let config_path = config_file.path().to_str().unwrap().to_string();

    let assert_result = run_rephrase_command(
        "A ditch, a Ditch, and migrants.",
        &["apply", "--no-summary", "--config", &config_path],
    )
    .success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    // The custom table replaces the defaults wholesale: "migrants" stays.
    assert_eq!(stdout, "A canal, a Canal, and migrants.\n");
    Ok(())
}

#[test]
fn test_apply_rejects_malformed_config() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: broken
    replacement: ""
    targets: []
"#;
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(yaml_content.as_bytes())?;
    let config_path = config_file.path().to_str().unwrap().to_string();

    let assert_result =
        run_rephrase_command("anything", &["apply", "--config", &config_path]).failure();
    let stderr = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stderr));
    assert!(stderr.contains("validation failed"), "stderr:\n{}", stderr);
    Ok(())
}

#[test]
fn test_apply_disable_rule() -> Result<()> {
    let input = "migrants at the migrant hotel";
    let assert_result = run_rephrase_command(
        input,
        &["apply", "--no-summary", "--disable", "immigrants,immigrant"],
    )
    .success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert_eq!(stdout, "migrants at the temporary accommodation\n");
    Ok(())
}

#[test]
fn test_apply_diff_output() -> Result<()> {
    let input = "the migrants\n";
    let assert_result = run_rephrase_command(input, &["apply", "--diff", "--no-summary"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert!(stdout.contains("-the migrants"), "stdout:\n{}", stdout);
    assert!(stdout.contains("+the expats"), "stdout:\n{}", stdout);
    Ok(())
}

#[test]
fn test_apply_line_buffered() -> Result<()> {
    let input = "the migrants\nno changes here\none asylum seeker\n";
    let assert_result =
        run_rephrase_command(input, &["apply", "--line-buffered", "--no-summary"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert_eq!(stdout, "the expats\nno changes here\none person seeking safety\n");
    Ok(())
}

#[test]
fn test_apply_output_to_file() -> Result<()> {
    let output_file = NamedTempFile::new()?;
    let output_path = output_file.path().to_str().unwrap().to_string();

    run_rephrase_command(
        "an illegal alien",
        &["apply", "--no-summary", "-o", &output_path],
    )
    .success();

    let written = std::fs::read_to_string(output_file.path())?;
    assert_eq!(written, "an undocumented person\n");
    Ok(())
}

#[test]
fn test_scan_json_stdout() -> Result<()> {
    let input = "The economic migrants arrived at the migrant hotel.";
    let assert_result = run_rephrase_command(input, &["scan", "--json-stdout"]).success();
    let stdout = String::from_utf8_lossy(&assert_result.get_output().stdout);

    let report: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(report["total_occurrences"], 2);
    let rules = report["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 2);
    assert!(report["generated_at"].as_str().is_some());
    assert!(report["run_id"].as_str().is_some());
    Ok(())
}

#[test]
fn test_scan_does_not_print_transformed_text() -> Result<()> {
    let input = "the migrant hotel";
    let assert_result = run_rephrase_command(input, &["scan"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert!(!stdout.contains("temporary accommodation"));
    Ok(())
}

#[test]
fn test_scan_fail_over_threshold() -> Result<()> {
    let input = "migrants, refugees, and a migrant hotel";
    run_rephrase_command(input, &["scan", "--fail-over-threshold", "1"]).code(2);
    run_rephrase_command(input, &["scan", "--fail-over-threshold", "100"]).success();
    Ok(())
}

#[test]
fn test_empty_input_is_not_an_error() -> Result<()> {
    let assert_result = run_rephrase_command("", &["apply", "--no-summary"]).success();
    let stdout = strip_ansi(&String::from_utf8_lossy(&assert_result.get_output().stdout));
    assert_eq!(stdout, "\n");
    Ok(())
}
