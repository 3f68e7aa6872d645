//! Integration tests for the CLI binary.
//!
//! These run the compiled binary in a temporary directory so preferences
//! land in that directory's `.webgal-playground/config.yaml`.

mod common;

use common::{SAMPLE_LINES, run_playground_in_dir, write_sample};
use serde_json::Value;
use tempfile::TempDir;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_no_command_prints_banner() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_playground_in_dir(temp_dir.path(), &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("WebGAL Parser Playground"));
}

#[test]
fn test_parse_prints_output_json() {
    let temp_dir = TempDir::new().unwrap();
    write_sample(temp_dir.path());

    let output = run_playground_in_dir(temp_dir.path(), &["parse", "start.txt"]);
    assert!(output.status.success());

    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["sceneName"], "start.txt");
    assert_eq!(
        value["sentenceList"].as_array().unwrap().len(),
        SAMPLE_LINES
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parsed 8 sentences"));
}

#[test]
fn test_parse_then_locate() {
    let temp_dir = TempDir::new().unwrap();
    write_sample(temp_dir.path());

    let output = run_playground_in_dir(
        temp_dir.path(),
        &["parse", "start.txt", "--out", "start.json"],
    );
    assert!(output.status.success());
    assert!(temp_dir.path().join("start.json").exists());

    let output = run_playground_in_dir(
        temp_dir.path(),
        &["--json", "locate", "start.json", "--line", "1,9"],
    );
    assert!(output.status.success());

    let results: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);

    let first = &results[0];
    assert_eq!(first["line"], 1);
    assert_eq!(first["position"]["column"], 1);
    let start = first["selection"]["startLine"].as_u64().unwrap();
    let end = first["selection"]["endLine"].as_u64().unwrap();
    assert!(start < end);

    assert!(results[1]["position"].is_null());
    assert!(results[1]["selection"].is_null());
}

#[test]
fn test_locate_malformed_output_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("bad.json"), "{ not json").unwrap();

    let output = run_playground_in_dir(temp_dir.path(), &["locate", "bad.json", "-l", "1"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("no mapping"));
}

#[test]
fn test_map_all_lines() {
    let temp_dir = TempDir::new().unwrap();
    write_sample(temp_dir.path());

    let output = run_playground_in_dir(temp_dir.path(), &["map", "start.txt"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), SAMPLE_LINES);
    assert!(text.lines().next().unwrap().starts_with("line 1 changeBg (changeBg) -> "));
    assert!(!text.contains("no mapping"));
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_playground_in_dir(temp_dir.path(), &["config", "theme", "toggle"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("dark (webgal-theme-dark)"));

    let output = run_playground_in_dir(temp_dir.path(), &["config", "location", "on"]);
    assert!(output.status.success());

    let output = run_playground_in_dir(temp_dir.path(), &["--json", "config", "show"]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["config"]["theme"], "dark");
    assert_eq!(value["config"]["location"], true);

    assert!(
        temp_dir
            .path()
            .join(".webgal-playground")
            .join("config.yaml")
            .exists()
    );
}

#[test]
fn test_config_unknown_version_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_playground_in_dir(temp_dir.path(), &["config", "version", "0.0.0-nope"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown parser version"));
}

#[test]
fn test_config_version_selects_parser() {
    let temp_dir = TempDir::new().unwrap();
    let version = env!("CARGO_PKG_VERSION");

    let output = run_playground_in_dir(temp_dir.path(), &["config", "version", version]);
    assert!(output.status.success());

    let output = run_playground_in_dir(temp_dir.path(), &["--json", "config", "show"]);
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["config"]["parser-version"], version);
}

#[test]
fn test_parse_missing_script_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_playground_in_dir(temp_dir.path(), &["parse", "absent.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read absent.txt"));
}

#[test]
fn test_versions_lists_builtin() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_playground_in_dir(temp_dir.path(), &["--json", "versions"]);
    assert!(output.status.success());

    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let versions = value["versions"].as_array().unwrap();
    assert!(!versions.is_empty());
    assert_eq!(value["selected"], versions[0]);
}
