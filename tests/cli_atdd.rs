#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCORES: &str = "\
Project Name,Project Number,Track,Judge A,Judge B
Alpha,1,web,8,6
Beta,2,ml,4,9
";

const ATTENDANCE: &str = "\
Project Number,Week 1,Week 2
1,x,
2,x,x
";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("fixture should write");
    path
}

/// Command isolated from the caller's home and working-directory config.
fn showcase(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("showcase-scores").expect("binary should compile");
    cmd.env("HOME", dir.path())
        .env_remove("SHOWCASE_LOG")
        .arg("--config-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn kappa_zero_raw_matches_signed_deviation_sum() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);

    showcase(&dir)
        .arg("kappa")
        .arg(&scores)
        .args(["--kappa", "0", "--raw", "--format", "csv"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "rank,project,score\n1,Alpha,0.5\n2,Beta,-0.5",
        ));
}

#[test]
fn variance_json_reports_normalized_ranking() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);

    let output = showcase(&dir)
        .arg("variance")
        .arg(&scores)
        .args(["--format", "json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be json");
    assert_eq!(value["method"], "proportional-variance");
    assert_eq!(value["normalized"], true);
    assert_eq!(value["entries"][0]["score"], 1.0);
    assert_eq!(value["entries"][1]["score"], 0.0);
    assert_eq!(
        value["input_sha256"].as_str().map(str::len),
        Some(64),
        "digest should be hex sha256"
    );
}

#[test]
fn prescreen_blends_attendance_through_name_number_pairs() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);
    let attendance = write(dir.path(), "attendance.csv", ATTENDANCE);

    // Normalized kappa: Alpha 1.0, Beta 0.0. Attendance: 1 -> 0.5, 2 -> 1.0.
    showcase(&dir)
        .arg("prescreen")
        .arg(&scores)
        .arg("--attendance")
        .arg(&attendance)
        .arg("--pairs")
        .arg(&scores)
        .args(["--ratio", "0.5", "--format", "csv"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "rank,project,score\n1,Alpha,0.75\n2,Beta,0.5",
        ));
}

#[test]
fn prescreen_uses_ratio_from_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);
    let attendance = write(dir.path(), "attendance.csv", ATTENDANCE);
    write(
        dir.path(),
        "showcase.toml",
        "[scoring]\nmethod = \"variance\"\n\n[attendance]\nratio = 1.0\n",
    );

    // Ratio 1 yields the attendance values regardless of scores.
    showcase(&dir)
        .arg("prescreen")
        .arg(&scores)
        .arg("--attendance")
        .arg(&attendance)
        .arg("--pairs")
        .arg(&scores)
        .args(["--format", "csv"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1,Beta,1\n2,Alpha,0.5"));
}

#[test]
fn prescreen_fails_on_missing_attendance_identifier() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);
    let attendance = write(dir.path(), "attendance.csv", "Project Number,Week 1\n1,x\n");

    showcase(&dir)
        .arg("prescreen")
        .arg(&scores)
        .arg("--attendance")
        .arg(&attendance)
        .arg("--pairs")
        .arg(&scores)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing identifier in attendance: 2"));
}

#[test]
fn prescreen_without_pairs_requires_matching_identifiers() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);
    let attendance = write(dir.path(), "attendance.csv", ATTENDANCE);

    showcase(&dir)
        .arg("prescreen")
        .arg(&scores)
        .arg("--attendance")
        .arg(&attendance)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing identifier in attendance"));
}

#[test]
fn flat_scores_exit_with_warning_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(
        dir.path(),
        "scores.csv",
        "Project Name,Judge A,Judge B\nAlpha,5,7\nBeta,5,7\n",
    );

    showcase(&dir)
        .arg("kappa")
        .arg(&scores)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("flat_range"))
        .stderr(predicate::str::contains("zero range"));
}

#[test]
fn negative_kappa_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);

    showcase(&dir)
        .arg("kappa")
        .arg(&scores)
        .arg("--kappa=-1")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("kappa must be a non-negative"));
}

#[test]
fn missing_score_cell_is_reported() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(
        dir.path(),
        "scores.csv",
        "Project Name,Judge A,Judge B\nAlpha,5,\nBeta,4,7\n",
    );

    showcase(&dir)
        .arg("variance")
        .arg(&scores)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "missing score for project 'Alpha', judge 'Judge B'",
        ));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let scores = write(dir.path(), "scores.csv", SCORES);
    write(dir.path(), "showcase.toml", "[scoring]\nkappa = -2.0\n");

    showcase(&dir)
        .arg("kappa")
        .arg(&scores)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("scoring.kappa"));
}

#[test]
fn missing_scores_file_is_reported() {
    let dir = TempDir::new().expect("temp dir should be created");

    showcase(&dir)
        .arg("kappa")
        .arg(dir.path().join("absent.csv"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
