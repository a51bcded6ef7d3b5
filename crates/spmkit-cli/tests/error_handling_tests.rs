//! Tests for error handling, exit codes and suggestions.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn spmkit(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("spmkit");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"));
    cmd
}

#[test]
fn test_error_invalid_project_name() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .args(["new", "my-tool", "--dry-run"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions"));
}

#[test]
fn test_error_hidden_name() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .args(["new", ".hidden"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!temp.path().join(".hidden").exists());
}

#[test]
fn test_error_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .args(["--quiet", "--verbose", "new", "demo"])
        .assert()
        .code(2);
}

#[test]
fn test_error_unknown_style() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .args(["new", "demo", "--style", "framework"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("framework"));
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .args(["config", "get", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown configuration key 'nope'"));
}

#[test]
fn test_error_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .args(["-c", "does-not-exist.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_malformed_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("bad.toml");
    std::fs::write(&config, "[defaults]\nstyle = \"framework\"\n").unwrap();

    spmkit(&temp)
        .arg("-c")
        .arg(&config)
        .args(["new", "demo", "--dry-run"])
        .assert()
        .code(4);
}

#[test]
fn test_error_invalid_config_value_leaves_file_alone() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("spmkit.toml");

    spmkit(&temp)
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "defaults.repo", "sometimes"])
        .assert()
        .code(2);
    assert!(!config.exists());
}

#[cfg(unix)]
#[test]
fn test_error_missing_git_keeps_written_files() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .env("SPMKIT_TOOLS__GIT", "/nonexistent/git")
        .env("SPMKIT_AUTHOR__NAME", "Jane Doe")
        .args(["new", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/git"));

    // No rollback: boilerplate written before the failure stays.
    assert!(temp.path().join("demo/Package.swift").is_file());
}

#[cfg(unix)]
#[test]
fn test_error_failing_git_shows_output_when_verbose() {
    let temp = TempDir::new().unwrap();
    spmkit(&temp)
        .env("SPMKIT_TOOLS__GIT", "/bin/false")
        .env("SPMKIT_AUTHOR__NAME", "Jane Doe")
        .args(["-v", "new", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/bin/false init"));
}
