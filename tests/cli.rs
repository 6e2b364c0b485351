//! End-to-end tests for the spendlog binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", dir.path());
    cmd
}

fn add_entry(dir: &TempDir, account: &str, month: &str, starting: &str, balance: &str, credit: &str) {
    spendlog(dir)
        .args(["entry", "add", account, month, "2024"])
        .args(["-s", starting, "-b", balance, "-c", credit])
        .assert()
        .success();
}

fn seeded() -> TempDir {
    let dir = TempDir::new().unwrap();
    spendlog(&dir).arg("init").assert().success();
    spendlog(&dir)
        .args(["account", "create", "hdfc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account: HDFC"));
    add_entry(&dir, "HDFC", "January", "5000", "2000", "500");
    add_entry(&dir, "HDFC", "February", "4000", "3000", "250");
    dir
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    spendlog(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default page size: 10"));
}

#[test]
fn account_list_shows_entry_counts() {
    let dir = seeded();
    spendlog(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HDFC"));
}

#[test]
fn summary_shows_cards_and_trend() {
    let dir = seeded();
    spendlog(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: HDFC"))
        .stdout(predicate::str::contains("Current Balance (Last Month)"))
        .stdout(predicate::str::contains("₹3,000.00"))
        .stdout(predicate::str::contains("▲ 50.0% from last month"))
        .stdout(predicate::str::contains("▼ 50.0% from last month"))
        .stdout(predicate::str::contains("Showing 1-2 of 2 entries"))
        .stdout(predicate::str::contains("Years: 2024 | Months: Jan, Feb"));
}

#[test]
fn summary_remembers_filters() {
    let dir = seeded();
    spendlog(&dir)
        .args(["summary", "--month", "jan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month: January"))
        .stdout(predicate::str::contains("Showing 1-1 of 1 entries"));

    spendlog(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Month: January"));

    spendlog(&dir)
        .args(["summary", "--month", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month: All Months"));
}

#[test]
fn summary_remembers_all_accounts() {
    let dir = seeded();
    spendlog(&dir)
        .args(["account", "create", "axis"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["summary", "--account", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: All Accounts"));

    spendlog(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: All Accounts"))
        .stdout(predicate::str::contains("Showing 1-2 of 2 entries"));
}

#[test]
fn summary_rejects_bad_page_size() {
    let dir = seeded();
    spendlog(&dir)
        .args(["summary", "--page-size", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page size"));
}

#[test]
fn duplicate_entry_is_rejected() {
    let dir = seeded();
    spendlog(&dir)
        .args(["entry", "add", "hdfc", "feb", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry already exists: HDFC February 2024"));
}

#[test]
fn entry_for_unknown_account_fails_without_flag() {
    let dir = seeded();
    spendlog(&dir)
        .args(["entry", "add", "axis", "march", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));

    spendlog(&dir)
        .args(["entry", "add", "axis", "march", "2024", "--create-account"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry: AXIS"));
}

#[test]
fn export_csv_writes_every_filtered_entry() {
    let dir = seeded();
    let output = dir.path().join("ledger.csv");

    spendlog(&dir)
        .arg("export")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries as csv"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with("Account,Month,Year"));
    assert!(contents.contains("HDFC,February,2024,4000.00,3000.00,250.00"));
}

#[test]
fn export_json_by_extension() {
    let dir = seeded();
    let output = dir.path().join("ledger.json");

    spendlog(&dir).arg("export").arg(&output).assert().success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["schema_version"], "1.0.0");
    assert_eq!(value["entry_count"], 2);
}

#[test]
fn audit_lists_changes() {
    let dir = seeded();
    spendlog(&dir)
        .args(["audit", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("HDFC February 2024"));
}
