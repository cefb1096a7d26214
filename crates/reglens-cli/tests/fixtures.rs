//! CLI integration tests for `show` and `export` against checked-in
//! report fixtures in `tests/fixtures/`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the reglens binary.
#[allow(deprecated)]
fn reglens_cmd() -> Command {
    Command::cargo_bin("reglens").expect("reglens binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("reglens-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn basic_report() -> PathBuf {
    fixtures_dir().join("report_basic.json")
}

#[test]
fn show_prints_numbered_canonical_json_with_header() {
    reglens_cmd()
        .arg("show")
        .arg("--report")
        .arg(basic_report())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("compliance_report.json"))
        .stdout(predicate::str::contains("lines"))
        .stdout(predicate::str::contains(r#""regulation_id": "REG-103""#))
        // line numbers are right-aligned in a 4-wide gutter
        .stdout(predicate::str::contains("   1  {"));
}

#[test]
fn show_without_color_emits_no_ansi_escapes() {
    let output = reglens_cmd()
        .arg("show")
        .arg("--report")
        .arg(basic_report())
        .arg("--no-color")
        .output()
        .expect("run reglens show");
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains('\x1b'));
}

#[test]
fn show_with_color_highlights_severities() {
    let output = reglens_cmd()
        .arg("show")
        .arg("--report")
        .arg(basic_report())
        .output()
        .expect("run reglens show");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // red for the HIGH severity line
    assert!(stdout.contains("\x1b[31m"));
}

#[test]
fn show_missing_report_is_a_defined_empty_state() {
    reglens_cmd()
        .arg("show")
        .arg("--report")
        .arg("does/not/exist.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no report at"))
        .stderr(predicate::str::contains("reglens analyze"));
}

#[test]
fn export_writes_the_named_artifact() {
    let out = TempDir::new().expect("tempdir");

    reglens_cmd()
        .arg("export")
        .arg("--report")
        .arg(basic_report())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("compliance_report_REG-103.json"));

    let artifact = out.path().join("compliance_report_REG-103.json");
    let written = std::fs::read_to_string(&artifact).expect("artifact exists");
    assert!(written.contains(r#""regulation_id": "REG-103""#));
}

#[test]
fn export_clipboard_matches_the_artifact_bytes() {
    let out = TempDir::new().expect("tempdir");

    reglens_cmd()
        .arg("export")
        .arg("--report")
        .arg(basic_report())
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    let clipboard = reglens_cmd()
        .arg("export")
        .arg("--report")
        .arg(basic_report())
        .arg("--clipboard")
        .output()
        .expect("run reglens export --clipboard");
    assert!(clipboard.status.success());

    let artifact = std::fs::read(out.path().join("compliance_report_REG-103.json"))
        .expect("artifact exists");
    assert_eq!(clipboard.stdout, artifact);
}

#[test]
fn export_rejects_a_malformed_report() {
    let dir = TempDir::new().expect("tempdir");
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"regulation_id": "REG-9"}"#).expect("write bad report");

    reglens_cmd()
        .arg("export")
        .arg("--report")
        .arg(&bad)
        .arg("--clipboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse report"));
}
