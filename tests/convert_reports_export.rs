use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir);
    cmd
}

fn setup(dir: &Path) {
    fintrack(dir)
        .args([
            "auth", "register", "--name", "Demo User", "--email", "demo@example.com",
            "--password", "hunter22",
        ])
        .assert()
        .success();
    fintrack(dir)
        .args(["account", "add", "Checking", "--balance", "1000.00"])
        .assert()
        .success();
    fintrack(dir)
        .args([
            "transaction", "add", "Checking", "45.99", "Grocery Store", "--category", "food",
        ])
        .assert()
        .success();
}

#[test]
fn test_convert_output() {
    let temp = TempDir::new().unwrap();

    fintrack(temp.path())
        .args(["convert", "100", "USD", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00 USD = €85.00 EUR"));
}

#[test]
fn test_convert_identity() {
    let temp = TempDir::new().unwrap();

    fintrack(temp.path())
        .args(["convert", "42.42", "JPY", "JPY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("¥42.42 JPY = ¥42.42 JPY"));
}

#[test]
fn test_convert_rejects_unknown_currency() {
    let temp = TempDir::new().unwrap();

    fintrack(temp.path())
        .args(["convert", "100", "USD", "BTC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown currency"));
}

#[test]
fn test_spending_report() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    fintrack(temp.path())
        .args(["report", "spending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("$45.99"));

    fintrack(temp.path())
        .args(["report", "spending", "--csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category,Amount,Transactions,Percent"));
}

#[test]
fn test_networth_report_uses_display_currency() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    fintrack(temp.path())
        .args(["config", "set", "currency", "EUR"])
        .assert()
        .success();

    fintrack(temp.path())
        .args(["report", "networth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Worth (EUR)"))
        .stdout(predicate::str::contains("Checking"));
}

#[test]
fn test_cashflow_report() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    fintrack(temp.path())
        .args(["report", "cashflow", "--months", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash Flow"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn test_export_json_and_csv() {
    let temp = TempDir::new().unwrap();
    setup(temp.path());

    fintrack(temp.path())
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accounts\""))
        .stdout(predicate::str::contains("Grocery Store"));

    fintrack(temp.path())
        .args(["export", "csv", "transactions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID,Date,Account,Description"))
        .stdout(predicate::str::contains("-45.99"));

    let out_file = temp.path().join("snapshot.yaml");
    fintrack(temp.path())
        .args(["export", "yaml", "--output"])
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported successfully"));
    let yaml = std::fs::read_to_string(&out_file).unwrap();
    assert!(yaml.contains("accounts:"));
}

#[test]
fn test_config_show_and_set() {
    let temp = TempDir::new().unwrap();

    fintrack(temp.path())
        .args(["config", "set", "theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved successfully!"));

    fintrack(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme:       Light"));

    fintrack(temp.path())
        .args(["config", "set", "volume", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
}
