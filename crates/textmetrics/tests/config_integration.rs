//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["words_per_minute"], 200);
    assert_eq!(json["config"]["top_n"], 10);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textmetrics.toml"), "words_per_minute = 250\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["words_per_minute"], 250);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".textmetrics.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(tmp.path().join("textmetrics.toml"), "top_n = 4\n").unwrap();

    let json = info_json(&nested);

    assert_eq!(json["config"]["top_n"], 4);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textmetrics.toml"), "top_n = 4\n").unwrap();
    fs::write(tmp.path().join("textmetrics.toml"), "top_n = 7\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["top_n"], 7);
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textmetrics.yaml"), "log_level: warn\n").unwrap();

    assert_eq!(info_json(tmp.path())["config"]["log_level"], "warn");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textmetrics.json"),
        r#"{"highlight_open": "<mark>", "highlight_close": "</mark>"}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["highlight_open"], "<mark>");
    assert_eq!(json["config"]["highlight_close"], "</mark>");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textmetrics.toml"), "top_n = 4\n").unwrap();
    let explicit = tmp.path().join("custom.toml");
    fs::write(&explicit, "top_n = 9\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["top_n"], 9);
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textmetrics.toml"), "words_per_minute = 250\n").unwrap();

    let output = cmd()
        .env("TEXTMETRICS_WORDS_PER_MINUTE", "333")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["words_per_minute"], 333);
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let work = repo.join("work");
    fs::create_dir_all(&work).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(tmp.path().join(".textmetrics.toml"), "top_n = 4\n").unwrap();

    let json = info_json(&work);

    assert_eq!(json["config"]["top_n"], 10);
}

// =============================================================================
// Config Applied to Commands
// =============================================================================

#[test]
fn config_top_n_applies_to_top_command() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textmetrics.toml"), "top_n = 2\n").unwrap();
    fs::write(tmp.path().join("in.txt"), "a b c d").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "top", "in.txt", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn config_markers_apply_to_html_highlight() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textmetrics.toml"),
        "highlight_open = \"<mark>\"\nhighlight_close = \"</mark>\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("in.txt"), "The cat sat").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "highlight",
            "in.txt",
            "--term",
            "cat",
            "--markup",
            "html",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("The <mark>cat</mark> sat\n"));
}

// =============================================================================
// Invalid Config
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textmetrics.toml"), "top_n = [unclosed").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textmetrics.toml"),
        "top_n = 3\nnot_a_real_field = true\n",
    )
    .unwrap();

    assert_eq!(info_json(tmp.path())["config"]["top_n"], 3);
}
