use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn decide(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("decide").unwrap();
    cmd.arg("--dir").arg(dir).env_remove("RUST_LOG");
    cmd
}

fn initialized() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    decide(dir.path()).arg("init").assert().success();
    dir
}

#[test]
fn init_then_validate() {
    let dir = initialized();
    decide(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 stakeholders"))
        .stdout(predicate::str::contains("2 frameworks"))
        .stdout(predicate::str::contains("all records valid"));
}

#[test]
fn init_twice_reports_existing_files() {
    let dir = initialized();
    decide(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));
}

#[test]
fn stakeholder_lookup() {
    let dir = initialized();
    decide(dir.path())
        .args(["stakeholder", "lena.fischer@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Security Lead"))
        .stdout(predicate::str::contains("document, biweekly, detailed"));
}

#[test]
fn unknown_stakeholder_is_not_found() {
    let dir = initialized();
    decide(dir.path())
        .args(["stakeholder", "nobody@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: stakeholder 'nobody@example.com' not found",
        ));
}

#[test]
fn missing_record_file_reported() {
    let dir = tempdir().unwrap();
    decide(dir.path())
        .args(["list", "projects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file missing"));
}

#[test]
fn invalid_schema_reported() {
    let dir = initialized();
    fs::write(
        dir.path().join("stakeholder_contexts.yaml"),
        "stakeholders:\n  - id: not-an-email\n",
    )
    .unwrap();
    decide(dir.path())
        .args(["stakeholder", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid schema"));
}

#[test]
fn framework_scoring() {
    let dir = initialized();
    // 4*0.3 + 3*0.4 + 2*0.3
    decide(dir.path())
        .args([
            "framework",
            "weighted-scoring",
            "--rate",
            "cost=4",
            "--rate",
            "impact=3",
            "--rate",
            "risk=2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.00"));
}

#[test]
fn framework_scoring_requires_every_criterion() {
    let dir = initialized();
    decide(dir.path())
        .args(["framework", "weighted-scoring", "--rate", "cost=4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing rating"));
}

#[test]
fn project_json_output() {
    let dir = initialized();
    let output = decide(dir.path())
        .args(["--output", "json", "project", "billing-v2", "--today", "2026-10-18"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["owner"], "maria.chen@example.com");
    assert_eq!(value["next_milestone"]["name"], "decision");
}

#[test]
fn list_uses_configured_output() {
    let dir = initialized();
    fs::write(dir.path().join("config.json"), r#"{"default_output": "yaml"}"#).unwrap();
    decide(dir.path())
        .args(["list", "frameworks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("key: weighted-scoring"));
}

#[test]
fn validate_reports_unknown_framework() {
    let dir = initialized();
    let path = dir.path().join("projects.yaml");
    let projects = fs::read_to_string(&path)
        .unwrap()
        .replace("framework: build-vs-buy", "framework: coin-flip");
    fs::write(&path, projects).unwrap();
    decide(dir.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "project 'billing-v2': framework 'coin-flip' is not known",
        ));
}

#[test]
fn decide_dir_env_selects_directory() {
    let dir = initialized();
    let cwd = tempdir().unwrap();
    Command::cargo_bin("decide")
        .unwrap()
        .current_dir(cwd.path())
        .env("DECIDE_DIR", dir.path())
        .env_remove("RUST_LOG")
        .args(["stakeholder", "dev.okafor@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dev Okafor"));
}

#[test]
fn verbose_logs_loads_to_stderr() {
    let dir = initialized();
    decide(dir.path())
        .args(["-v", "list", "projects"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded records"))
        .stdout(predicate::str::contains("loaded records").not());
}

#[test]
fn quiet_by_default() {
    let dir = initialized();
    decide(dir.path())
        .args(["list", "projects"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
