use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::project;

fn srcmetrics() -> Command {
    Command::new(env!("CARGO_BIN_EXE_srcmetrics"))
}

#[test]
fn shows_help() {
    srcmetrics()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--lang").and(predicate::str::contains("--exclude")));
}

#[test]
fn prints_go_tables_by_default() {
    let dir = project(&[
        ("main.go", "package main\nfunc main() {}\n"),
        ("main_test.go", "package main\nfunc TestMain2(t *testing.T) {}\n"),
    ]);
    srcmetrics()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Go Lines of Code Statistics")
                .and(predicate::str::contains("| Source Files | 2 "))
                .and(predicate::str::contains("| Test Function Count     | 1 ")),
        );
}

#[test]
fn json_output_is_one_flat_object() {
    let dir = project(&[
        ("web/app.js", "const a = 1;\n// note\n"),
        ("web/app.test.js", "it('works', () => {});\n"),
        ("node_modules/lib/index.js", "module.exports = {};\n"),
    ]);
    let output = srcmetrics().arg(dir.path()).args(["--lang", "JS", "--json"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["language"], "js");
    assert_eq!(report["source_files_count"], 1);
    assert_eq!(report["test_files_count"], 1);
    assert_eq!(report["test_function_count"], 1);
    assert_eq!(report["package_count"], 1);
}

#[test]
fn yaml_has_no_test_rows() {
    let dir = project(&[("config.yaml", "name: test\n# comment\nversion: 1.0.0\n")]);
    srcmetrics()
        .arg(dir.path())
        .args(["-l", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| YAML Files   | 2 ").and(predicate::str::contains("Test Files").not()));
}

#[test]
fn extra_excludes_are_applied() {
    let dir = project(&[("gen/api.go", "package api\n"), ("cmd/main.go", "package main\n")]);
    let output = srcmetrics().arg(dir.path()).args(["--json", "-e", "gen,other"]).output().unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["source_files_count"], 1);
    assert!(report["excluded_dirs"].as_array().unwrap().iter().any(|d| d == "other"));
}

#[test]
fn unknown_language_fails_with_message() {
    let dir = project(&[]);
    srcmetrics()
        .arg(dir.path())
        .args(["--lang", "cobol"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid language").and(predicate::str::contains("cobol")));
}

#[test]
fn missing_root_fails() {
    let dir = project(&[]);
    srcmetrics().arg(dir.path().join("absent")).assert().failure().stderr(predicate::str::contains("absent"));
}
