//! Smoke tests for the tally CLI
//!
//! These run the real binary and check the console contract end to end.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the tally binary with a clean environment
fn tally() -> Command {
    let mut cmd = Command::cargo_bin("tally").expect("tally binary should exist");
    cmd.env_remove("TALLY_COLOR")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_flag() {
    tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--color"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    tally()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Worked Example
// ============================================================================

#[test]
fn test_failures_set_exit_code() {
    tally().args(["--color", "never"]).assert().code(1);
}

#[test]
fn test_diagnostics_on_stderr() {
    tally()
        .args(["--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("TestEqual failed: 6 == a in file "))
        .stderr(predicate::str::contains("; failure number: 1;"))
        .stderr(predicate::str::contains("TestExpression failed: a == b in file "))
        .stderr(predicate::str::contains("; failure number: 2;"))
        .stderr(predicate::str::contains("TestLarger").not())
        .stderr(predicate::str::contains("TestUnEqual").not());
}

#[test]
fn test_summary_on_stderr() {
    tally()
        .args(["--color", "never"])
        .assert()
        .stderr(predicate::str::contains(
            "Total Tests: 4\nPassed Tests: 2\nFailed Tests: 2\nRunning Time: ",
        ))
        .stderr(predicate::str::is_match(r"Running Time: \d+(\.\d+)?ms\n$").unwrap());
}

#[test]
fn test_never_color_has_no_escapes() {
    tally()
        .args(["--color", "never"])
        .assert()
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_always_color_decorates() {
    tally()
        .args(["--color", "always"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_no_color_env() {
    tally()
        .env("NO_COLOR", "1")
        .assert()
        .stderr(predicate::str::contains("\u{1b}[").not());
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[test]
fn test_invalid_env_color() {
    tally()
        .env("TALLY_COLOR", "loud")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid color choice 'loud'"));
}

#[test]
fn test_color_flag_overrides_invalid_env() {
    tally()
        .env("TALLY_COLOR", "loud")
        .args(["--color", "never"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid color choice").not())
        .stderr(predicate::str::contains(
            "Total Tests: 4\nPassed Tests: 2\nFailed Tests: 2\n",
        ));
}

#[test]
fn test_invalid_color_flag() {
    tally()
        .args(["--color", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sometimes"));
}

// ============================================================================
// JSON Export
// ============================================================================

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    tally()
        .args(["--color", "never", "--delay-ms", "30", "--json"])
        .arg(&path)
        .assert()
        .code(1);

    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["passed"], 2);
    assert_eq!(json["failed"], 2);
    assert!(json["elapsed_ms"].as_f64().unwrap() >= 30.0);
}

#[test]
fn test_json_report_unwritable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("report.json");

    tally()
        .args(["--color", "never", "--json"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Total Tests: 4"))
        .stderr(predicate::str::contains("Error: I/O error"));
}
