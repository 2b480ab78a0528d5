//! Regression tests for the CLI surface.
//! Requires: assert_cmd, predicates crates in [dev-dependencies].

use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const SUITE: &str = r#"{
    "valid": [["+", 1, 2], 42],
    "invalid": [["let"]]
}"#;

#[test]
fn cli_reports_miette_diagnostics_for_a_missing_suite() {
    let mut cmd = Command::cargo_bin("gauntlet").unwrap();
    cmd.args(["run", "--suite", "no/such/suite.json", "--compiler", "cat"]);
    cmd.assert()
        .failure()
        .stderr(contains("gauntlet::suite_parse").or(contains("malformed test-suite file")));
}

#[test]
fn cli_reports_the_no_valid_tests_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("suite.json");
    fs::write(&path, r#"{ "invalid": [["let"]] }"#).unwrap();

    let mut cmd = Command::cargo_bin("gauntlet").unwrap();
    cmd.args(["run", "--compiler", "cat"])
        .arg("--suite")
        .arg(&path);
    cmd.assert()
        .failure()
        .stderr(contains("gauntlet::no_valid_tests").or(contains("no valid test cases found")));
}

#[test]
fn cli_runs_both_groups_and_flags_unexpected_passes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("suite.json");
    fs::write(&path, SUITE).unwrap();

    // `cat` exits 0 on every case, so the invalid group passes unexpectedly
    // and the process must exit non-zero.
    let mut cmd = Command::cargo_bin("gauntlet").unwrap();
    cmd.args(["run", "--compiler", "cat"])
        .arg("--suite")
        .arg(&path);
    cmd.assert()
        .failure()
        .stdout(
            contains("Testing valid programs:")
                .and(contains("Testing invalid programs:"))
                .and(contains("Test summary:"))
                .and(contains("0: pass")),
        );
}

#[test]
fn cli_valid_subcommand_narrows_the_valid_group() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("suite.json");
    fs::write(&path, SUITE).unwrap();

    let mut cmd = Command::cargo_bin("gauntlet").unwrap();
    cmd.args(["valid", "--compiler", "cat"])
        .arg("--suite")
        .arg(&path)
        .arg("1");
    // One valid case plus the full (one-case) invalid group: index 1 never
    // appears because both printed groups are a single case long.
    cmd.assert().stdout(
        contains("Testing valid programs:")
            .and(contains("Testing invalid programs:"))
            .and(contains("  1: pass").not()),
    );
}

#[test]
fn cli_rejects_a_missing_compiler_argument() {
    let mut cmd = Command::cargo_bin("gauntlet").unwrap();
    cmd.arg("run");
    cmd.assert().failure().stderr(contains("--compiler"));
}
