use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    Command::cargo_bin("fintrack")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("account"))
        .stdout(predicate::str::contains("transaction"))
        .stdout(predicate::str::contains("budget"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_account_help_shows_subcommands() {
    Command::cargo_bin("fintrack")
        .unwrap()
        .args(["account", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("fintrack")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_no_args_prints_hint() {
    let temp = tempfile::TempDir::new().unwrap();
    Command::cargo_bin("fintrack")
        .unwrap()
        .env("FINTRACK_DATA_DIR", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fintrack --help"));
}
