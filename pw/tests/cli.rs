//! End-to-end tests for the pw binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pw(temp: &TempDir, config: &str) -> Command {
    let config_path = temp.path().join("pw.yml");
    std::fs::write(&config_path, config).expect("Failed to write config");

    let mut cmd = Command::cargo_bin("pw").expect("Failed to find pw binary");
    cmd.arg("--config").arg(&config_path);
    cmd
}

#[test]
fn test_walks_forward() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    pw(&temp, "{}\n")
        .args(["a b c d", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("::a::"))
        .stdout(predicate::str::contains("Phew, halfway there!"))
        .stdout(predicate::str::contains("Come on, just a little more!!!"))
        .stdout(predicate::str::contains("Observer detached."))
        .stdout(predicate::str::contains("Walked"));
}

#[test]
fn test_walks_backward() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output = pw(&temp, "{}\n").args(["first last", "YES"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last = stdout.find("::last::").unwrap();
    let first = stdout.find("::first::").unwrap();
    assert!(last < first);
    assert!(stdout.contains("backward"));
}

#[test]
fn test_reverse_default_from_config() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    pw(&temp, "reverse: true\n")
        .arg("x y")
        .assert()
        .success()
        .stdout(predicate::str::contains("backward"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    pw(&temp, "{}\n")
        .args(["a b", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn test_missing_text_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    pw(&temp, "{}\n").assert().failure();
}
