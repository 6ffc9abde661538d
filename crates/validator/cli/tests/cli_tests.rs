//! Command-line tests for csaf-check.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NESTED_FAILURE: &str = r#"{
  "success": false,
  "version": "2.0",
  "preset": "extended",
  "testResults": [
    { "testId": "6.1.1", "status": "success" },
    { "testId": "6.1.2", "status": { "kind": "Failure", "errors": [
      { "message": "missing field", "instancePath": "/document" }
    ] } }
  ],
  "numErrors": 1
}"#;

const LEGACY_SUCCESS: &str =
    r#"{"success": true, "version": "2.0", "preset": "basic", "errors": []}"#;

fn csaf_check(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("csaf-check").unwrap();
    // Keep the user's own config out of the picture.
    cmd.env("CSAF_CHECK_CONFIG", dir.path().join("absent.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn presets_lists_every_preset() {
    let dir = TempDir::new().unwrap();
    csaf_check(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("basic"))
        .stdout(predicate::str::contains("extended"))
        .stdout(predicate::str::contains("full"));
}

#[test]
fn normalize_prints_canonical_outcome() {
    let dir = TempDir::new().unwrap();
    let raw = write(dir.path(), "raw.json", NESTED_FAILURE);

    csaf_check(&dir)
        .args(["--output", "json", "normalize"])
        .arg(&raw)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""success": false"#))
        .stdout(predicate::str::contains(r#""message": "missing field""#))
        .stdout(predicate::str::contains(r#""path": "/document""#));
}

#[test]
fn normalize_table_numbers_issues() {
    let dir = TempDir::new().unwrap();
    let raw = write(dir.path(), "raw.json", NESTED_FAILURE);

    csaf_check(&dir)
        .arg("normalize")
        .arg(&raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors: 1"))
        .stdout(predicate::str::contains("missing field"));
}

#[test]
fn normalize_rejects_unknown_payload() {
    let dir = TempDir::new().unwrap();
    let raw = write(dir.path(), "raw.json", r#"{"verdict": "ok"}"#);

    csaf_check(&dir)
        .arg("normalize")
        .arg(&raw)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn validate_with_replay_reports_issues() {
    let dir = TempDir::new().unwrap();
    let raw = write(dir.path(), "raw.json", NESTED_FAILURE);
    let doc = write(dir.path(), "doc.json", r#"{"x":1}"#);

    csaf_check(&dir)
        .args(["--output", "json", "validate", "--preset", "extended", "--replay"])
        .arg(&raw)
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phase": "validated""#))
        .stdout(predicate::str::contains(r#""filename": "doc.json""#))
        .stdout(predicate::str::contains(r#""preset": "extended""#))
        .stdout(predicate::str::contains("missing field"));
}

#[test]
fn validate_table_reports_valid_document() {
    let dir = TempDir::new().unwrap();
    let raw = write(dir.path(), "raw.json", LEGACY_SUCCESS);
    let doc = write(
        dir.path(),
        "advisory.json",
        r#"{"document":{"csaf_version":"2.0","title":"Sample advisory"}}"#,
    );

    csaf_check(&dir)
        .args(["validate", "--replay"])
        .arg(&raw)
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample advisory"))
        .stdout(predicate::str::contains("Document is valid"));
}

#[test]
fn validate_rejects_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let raw = write(dir.path(), "raw.json", LEGACY_SUCCESS);
    let doc = write(dir.path(), "advisory.txt", "{}");

    csaf_check(&dir)
        .args(["validate", "--replay"])
        .arg(&raw)
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON file: advisory.txt"));
}

#[test]
fn validate_fails_when_engine_cannot_start() {
    let dir = TempDir::new().unwrap();
    let doc = write(dir.path(), "doc.json", "{}");

    csaf_check(&dir)
        .args(["validate", "--engine", "/nonexistent/csaf-validator"])
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation engine fault"));
}

#[test]
fn config_shows_file_settings() {
    let dir = TempDir::new().unwrap();
    let config = write(
        dir.path(),
        "config.toml",
        "default_preset = \"full\"\n\n[engine]\nprogram = \"validator-x\"\n",
    );

    csaf_check(&dir)
        .env("CSAF_CHECK_CONFIG", &config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_preset = \"full\""))
        .stdout(predicate::str::contains("validator-x"));
}

#[test]
fn default_preset_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "config.toml", "default_preset = \"full\"\n");
    let raw = write(dir.path(), "raw.json", LEGACY_SUCCESS);
    let doc = write(dir.path(), "doc.json", "{}");

    csaf_check(&dir)
        .env("CSAF_CHECK_CONFIG", &config)
        .args(["--output", "json", "validate", "--replay"])
        .arg(&raw)
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""preset": "full""#));
}
