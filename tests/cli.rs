use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir)
        .env_remove("EXPENSE_TRACKER_FILE");
    cmd
}

fn add(data_dir: &Path, amount: &str, category: &str, date: &str) -> String {
    let output = expense(data_dir)
        .args(["add", amount, "-c", category, "-d", date])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

fn ledger_text(data_dir: &Path) -> String {
    fs::read_to_string(data_dir.join("data").join("expense_data.csv")).unwrap()
}

#[test]
fn add_then_list_normalizes_legacy_category() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = add(temp_dir.path(), "120", "Travel", "2024-01-05");
    assert!(stdout.contains("Travel & Transport"));
    assert!(stdout.contains("₹120.00"));

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel & Transport"))
        .stdout(predicate::str::contains("2024-01-05"));

    let text = ledger_text(temp_dir.path());
    assert!(text.starts_with("Date,Category,Amount,Description,Id"));
    assert!(text.contains("2024-01-05,Travel & Transport,120.00,"));
}

#[test]
fn summary_reports_totals_and_top_category() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "50", "Food", "2024-01-10");
    add(temp_dir.path(), "900", "Rent", "2024-01-20");
    add(temp_dir.path(), "70", "Food", "2024-02-10");

    expense(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹ 1,020.00"))
        .stdout(predicate::str::contains("Top Category:  Rent"))
        .stdout(predicate::str::contains("2024-02"));
}

#[test]
fn summary_handles_empty_ledger_and_empty_filter() {
    let temp_dir = TempDir::new().unwrap();
    expense(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense data yet"));

    add(temp_dir.path(), "50", "Food", "2024-01-10");
    expense(temp_dir.path())
        .args(["summary", "-C", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available for the selected filters."));
}

#[test]
fn delete_without_selection_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "50", "Food", "2024-01-10");
    let before = ledger_text(temp_dir.path());

    expense(temp_dir.path())
        .arg("delete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please select an expense"));

    assert_eq!(ledger_text(temp_dir.path()), before);
}

#[test]
fn delete_by_short_id_and_index() {
    let temp_dir = TempDir::new().unwrap();
    let stdout = add(temp_dir.path(), "50", "Food", "2024-01-10");
    add(temp_dir.path(), "20", "Bills", "2024-01-11");
    let short_id = stdout.split_whitespace().nth(2).unwrap().to_string();
    assert!(short_id.starts_with("exp-"));

    expense(temp_dir.path())
        .args(["delete", &short_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted:"));
    assert!(!ledger_text(temp_dir.path()).contains("Food"));

    expense(temp_dir.path())
        .args(["delete", "--index", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    expense(temp_dir.path())
        .args(["delete", "--index", "0"])
        .assert()
        .success();
    assert_eq!(ledger_text(temp_dir.path()).lines().count(), 1);
}

#[test]
fn add_rejects_invalid_input() {
    let temp_dir = TempDir::new().unwrap();

    expense(temp_dir.path())
        .args(["add", "0", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    expense(temp_dir.path())
        .args(["add", "-5", "-c", "Food"])
        .assert()
        .failure();

    expense(temp_dir.path())
        .args(["add", "10", "-c", "Pets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pets"));

    expense(temp_dir.path())
        .args(["add", "10", "-c", "Food", "-d", "2024-13-40"])
        .assert()
        .failure();

    assert!(!temp_dir.path().join("data").join("expense_data.csv").exists());
}

#[test]
fn export_json_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "45.99", "Bills", "2024-03-01");

    let output = expense(temp_dir.path())
        .args(["export", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["expenses"][0]["amount"], 45.99);
    assert_eq!(value["summary"]["top_category"], "Bills");
}

#[test]
fn mutations_are_audited() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "50", "Food", "2024-01-10");
    expense(temp_dir.path())
        .args(["delete", "--index", "0"])
        .assert()
        .success();

    expense(temp_dir.path())
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn bad_date_format_setting_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "50", "Food", "2024-01-10");
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"date_format": "%Q"}"#,
    )
    .unwrap();

    expense(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn overflowing_totals_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("expense_data.csv"),
        "Date,Category,Amount\n2024-01-01,Food,90000000000000000\n2024-01-02,Food,90000000000000000\n",
    )
    .unwrap();

    expense(temp_dir.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"))
        .stderr(predicate::str::contains("panicked").not());
}
