//! End-to-end tests for the cx binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cx(temp: &TempDir, config: &str) -> Command {
    let config_path = temp.path().join("cx.yml");
    std::fs::write(&config_path, config).expect("Failed to write config");

    let mut cmd = Command::cargo_bin("cx").expect("Failed to find cx binary");
    cmd.arg("--config").arg(&config_path);
    cmd
}

#[test]
fn test_default_demonstration() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    cx(&temp, "{}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choosing algorithm A"))
        .stdout(predicate::str::contains("Taking two numbers 23 and 34"))
        .stdout(predicate::str::contains("result: 57"))
        .stdout(predicate::str::contains("Choosing algorithm B"))
        .stdout(predicate::str::contains("result: 2334"));
}

#[test]
fn test_operands_from_command_line() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    cx(&temp, "{}\n")
        .args(["-4", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result: 6"))
        .stdout(predicate::str::contains("result: -410"));
}

#[test]
fn test_algorithms_from_config() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    cx(&temp, "a: 1\nb: 2\nalgorithms: [concat]\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("result: 12"))
        .stdout(predicate::str::contains("summation").not());
}

#[test]
fn test_command_line_overrides_config_algorithms() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    cx(&temp, "algorithms: [concat]\n")
        .args(["--algorithms", "sum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result: 57"))
        .stdout(predicate::str::contains("concatenation").not());
}

#[test]
fn test_empty_algorithm_list_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    cx(&temp, "algorithms: []\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No algorithms configured"));
}
