use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env_remove("LITTLE_LEDGER_DIR")
        .env_remove("LEDGER_LOG")
        .arg("--dir")
        .arg(dir.path());
    cmd
}

#[test]
fn init_creates_workspace() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ledger workspace"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("accounts").is_dir());
}

#[test]
fn deposit_and_withdraw_scenario() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["account", "create", "checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account: checking"));

    ledger(&dir)
        .args(["deposit", "100.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $100.00"));

    ledger(&dir)
        .args(["withdraw", "30.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $70.00"));

    let raw = fs::read_to_string(dir.path().join("accounts").join("checking.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["balance"], 7000);
    assert_eq!(value["startBalance"], 0);

    let transactions = value["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["income"], 10000);
    assert_eq!(transactions[0]["expense"], 0);
    assert_eq!(transactions[1]["income"], 0);
    assert_eq!(transactions[1]["expense"], 3000);
    assert_eq!(transactions[1]["balance"], 7000);
    assert!(transactions[1]["timestamp"].is_i64());
}

#[test]
fn negative_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["account", "create", "checking"])
        .assert()
        .success();

    ledger(&dir)
        .args(["deposit", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    ledger(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));
}

#[test]
fn corrupt_account_file_fails_to_load() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["account", "create", "checking"])
        .assert()
        .success();

    fs::write(dir.path().join("accounts").join("checking.json"), "not json").unwrap();

    ledger(&dir)
        .args(["balance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn commands_need_an_account() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["deposit", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active account"));
}

#[test]
fn switch_active_account() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["account", "create", "checking"])
        .assert()
        .success();
    ledger(&dir)
        .args(["account", "create", "savings", "--balance", "250.00"])
        .assert()
        .success();

    ledger(&dir)
        .args(["account", "use", "savings"])
        .assert()
        .success();

    ledger(&dir)
        .args(["balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: savings"))
        .stdout(predicate::str::contains("Balance: $250.00"));

    ledger(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* savings"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["account", "create", "checking"])
        .assert()
        .success();
    ledger(&dir).args(["deposit", "12.34"]).assert().success();

    ledger(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "timestamp,date,income,expense,balance\n",
        ))
        .stdout(predicate::str::contains(",12.34,0.00,12.34"));
}

#[test]
fn audit_lists_operations() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["account", "create", "checking"])
        .assert()
        .success();
    ledger(&dir).args(["deposit", "5"]).assert().success();

    ledger(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE checking"))
        .stdout(predicate::str::contains("DEPOSIT checking $5.00"));
}

#[test]
fn shell_is_not_implemented() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("shell")
        .assert()
        .success()
        .stdout(predicate::str::contains("not implemented"));
}

#[test]
fn summaries_survive_out_of_range_totals() {
    let dir = TempDir::new().unwrap();
    let max = "92233720368547758.07";

    ledger(&dir)
        .args(["account", "create", "checking"])
        .assert()
        .success();
    ledger(&dir).args(["deposit", max]).assert().success();
    ledger(&dir).args(["withdraw", max]).assert().success();
    ledger(&dir).args(["deposit", max]).assert().success();

    ledger(&dir)
        .args(["balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $92233720368547758.07"));

    ledger(&dir)
        .args(["account", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:     (overflow)"));

    ledger(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn export_then_import_restores_account() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("checking.yaml");

    ledger(&dir)
        .args(["account", "create", "checking", "--balance", "10.00"])
        .assert()
        .success();
    ledger(&dir).args(["deposit", "5.25"]).assert().success();
    ledger(&dir)
        .args(["export", "yaml", "--output"])
        .arg(&file)
        .assert()
        .success();

    ledger(&dir)
        .arg("import")
        .arg(&file)
        .args(["--name", "restored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported restored (1 transactions). Balance: $15.25"));

    ledger(&dir)
        .args(["balance", "--account", "restored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $15.25"))
        .stdout(predicate::str::contains("Starting Balance: $10.00"));

    ledger(&dir)
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists: checking"));
}
