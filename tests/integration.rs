// Integration tests for the showcase-scores CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling before any sheet is read.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the showcase-scores binary.
fn showcase() -> Command {
    Command::cargo_bin("showcase-scores").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    showcase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("showcase-scores"));
}

#[test]
fn cli_help_flag() {
    showcase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Judge-bias-corrected"));
}

#[test]
fn kappa_requires_scores_path() {
    showcase()
        .arg("kappa")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn prescreen_requires_attendance() {
    showcase()
        .args(["prescreen", "scores.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--attendance"));
}

#[test]
fn quiet_and_verbose_conflict() {
    showcase()
        .args(["-q", "-v", "variance", "scores.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_method_is_rejected() {
    showcase()
        .args([
            "prescreen",
            "scores.csv",
            "--attendance",
            "attendance.csv",
            "--method",
            "median",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
