//! Integration tests for `orgcheck inspect`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `orgcheck` binary.
fn orgcheck_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("orgcheck");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn inspect(name: &str, extra: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(orgcheck_bin());
    cmd.args(["inspect", fixture(name).to_str().expect("path")]);
    cmd.args(extra);
    cmd.output().expect("run orgcheck inspect")
}

// ---------------------------------------------------------------------------
// inspect: human mode
// ---------------------------------------------------------------------------

#[test]
fn inspect_clean_exits_0() {
    let out = inspect("clean.csv", &[]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn inspect_clean_names_the_root() {
    let out = inspect("clean.csv", &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Joe Doe (1)"), "stdout: {stdout}");
    assert!(stdout.contains("headcount:      4"), "stdout: {stdout}");
}

#[test]
fn inspect_deep_reports_max_depth() {
    let out = inspect("deep.csv", &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("max depth:      6"), "stdout: {stdout}");
}

#[test]
fn inspect_multi_root_reports_candidates() {
    let out = inspect("multi-root.csv", &[]);
    // Inspect never fails on structural problems, it only reports shape.
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 candidates"), "stdout: {stdout}");
}

// ---------------------------------------------------------------------------
// inspect: JSON mode
// ---------------------------------------------------------------------------

#[test]
fn inspect_json_is_one_object() {
    let out = inspect("clean.csv", &["--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["headcount"], 4);
    assert_eq!(value["root"]["id"], 1);
    assert_eq!(value["root"]["name"], "Joe Doe");
    assert_eq!(value["report_group_count"], 2);
}

#[test]
fn inspect_json_null_root_for_multi_root() {
    let out = inspect("multi-root.csv", &["--format", "json"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert!(value["root"].is_null());
    assert_eq!(value["root_count"], 2);
}

// ---------------------------------------------------------------------------
// inspect: input failures
// ---------------------------------------------------------------------------

#[test]
fn inspect_malformed_exits_2() {
    let out = inspect("malformed.csv", &[]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn inspect_missing_file_exits_2() {
    let out = Command::new(orgcheck_bin())
        .args(["inspect", "no-such-file.csv"])
        .output()
        .expect("run orgcheck inspect");
    assert_eq!(out.status.code(), Some(2));
}
