use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir);
    cmd
}

fn register(dir: &Path) {
    fintrack(dir)
        .args([
            "auth", "register", "--name", "Demo User", "--email", "demo@example.com",
            "--password", "hunter22",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Demo User"));
}

#[test]
fn test_register_login_logout_cycle() {
    let temp = TempDir::new().unwrap();
    register(temp.path());

    fintrack(temp.path())
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo@example.com"));

    fintrack(temp.path())
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    fintrack(temp.path())
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));

    fintrack(temp.path())
        .args(["auth", "login", "demo@example.com", "--password", "hunter22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Demo User"));
}

#[test]
fn test_login_rejects_wrong_password() {
    let temp = TempDir::new().unwrap();
    register(temp.path());

    fintrack(temp.path())
        .args(["auth", "login", "demo@example.com", "--password", "wrong-password"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"));
}

#[test]
fn test_register_rejects_short_password() {
    let temp = TempDir::new().unwrap();
    fintrack(temp.path())
        .args([
            "auth", "register", "--name", "Demo User", "--email", "demo@example.com",
            "--password", "short",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 6 characters"));
}

#[test]
fn test_register_rejects_bad_email() {
    let temp = TempDir::new().unwrap();
    fintrack(temp.path())
        .args([
            "auth", "register", "--name", "Demo User", "--email", "not-an-email",
            "--password", "hunter22",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid email"));
}

#[test]
fn test_data_commands_require_session() {
    let temp = TempDir::new().unwrap();

    fintrack(temp.path())
        .args(["account", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_convert_works_without_session() {
    let temp = TempDir::new().unwrap();

    fintrack(temp.path())
        .args(["convert", "100", "USD", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€85.00"));
}
