//! Binary tests for the expboard CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expboard() -> Command {
    Command::cargo_bin("expboard").unwrap()
}

fn write(tmp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = tmp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Cells of the table row whose "Tab" column is `tab`.
fn row_cells(table: &str, tab: &str) -> Vec<String> {
    table
        .lines()
        .map(|line| {
            line.split(['│', '┆'])
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .find(|cells| cells.get(1).map(String::as_str) == Some(tab))
        .unwrap_or_else(|| panic!("no row for tab {} in:\n{}", tab, table))
}

#[test]
fn test_routes_flags_shared_suffix() {
    let output = expboard().arg("routes").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let run_env = row_cells(&stdout, "RunEnv");
    assert_eq!(run_env[2], "build");
    assert_eq!(run_env[3], "Build");

    let build = row_cells(&stdout, "Build");
    assert_eq!(build[2], "build");
    assert_eq!(build[3], "RunEnv");

    let logs = row_cells(&stdout, "Logs");
    assert_eq!(logs[3], "-");

    let overview = row_cells(&stdout, "Overview");
    assert_eq!(overview[2], "(base)");
    assert_eq!(overview[3], "-");
}

#[test]
fn test_inspect_grouped_experiment() {
    let tmp = TempDir::new().unwrap();
    let path = write(
        &tmp,
        "exp.json",
        r#"{"id": 42, "user": "alice", "project": "alice.proj1", "experiment_group": "alice.proj1.7", "last_status": "running"}"#,
    );

    expboard()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("/app/alice/proj1/experiments/42"))
        .stdout(predicate::str::contains("Group 7"))
        .stdout(predicate::str::contains("/app/alice/proj1/groups/7#experiments"))
        .stdout(predicate::str::contains("Experiment 42"))
        .stdout(predicate::str::contains("/app/alice/proj1/experiments/42/metrics"));
}

#[test]
fn test_inspect_reads_stdin() {
    expboard()
        .args(["inspect", "-"])
        .write_stdin(r#"{"id": 9, "user": "carol", "project": "carol.cifar", "bookmarked": true}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("/app/carol/cifar/experiments/9"))
        .stdout(predicate::str::contains("Bookmark: yes"))
        .stdout(predicate::str::contains("/app/carol/cifar#experiments"));
}

#[test]
fn test_inspect_stdin_null_shows_empty_state() {
    expboard()
        .args(["inspect", "-"])
        .write_stdin("null")
        .assert()
        .success()
        .stdout(predicate::str::contains("No experiment found."));
}

#[test]
fn test_inspect_with_prefix_override() {
    let tmp = TempDir::new().unwrap();
    let path = write(&tmp, "exp.json", r#"{"id": 1, "user": "bob", "project": "bob.mnist"}"#);

    expboard()
        .args(["inspect", "--prefix", "/ui"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("/ui/bob/mnist#experiments"));
}

#[test]
fn test_inspect_null_document_shows_empty_state() {
    let tmp = TempDir::new().unwrap();
    let path = write(&tmp, "null.json", "null");

    expboard()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No experiment found."));
}

#[test]
fn test_inspect_malformed_project_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write(&tmp, "bad.json", r#"{"id": 1, "user": "bob", "project": "bob"}"#);

    expboard()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid unique name"));
}

#[test]
fn test_inspect_missing_file_fails() {
    expboard()
        .args(["inspect", "/nonexistent/exp.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Experiment file not found"));
}

#[test]
fn test_invalid_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let config = write(&tmp, "dashboard.yaml", "app_prefix: no-slash\n");
    let exp = write(&tmp, "exp.json", r#"{"id": 1, "user": "bob", "project": "bob.mnist"}"#);

    expboard()
        .arg("inspect")
        .arg("--config")
        .arg(&config)
        .arg(&exp)
        .assert()
        .failure();
}
