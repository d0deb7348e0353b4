use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pocketbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env("POCKETBOOK_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_exit_prints_single_menu() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout("Balance: 0\nMenu:\n1 - Add expense\n2 - Add income\n3 - Undo last transaction\n4 - Show transaction history\n5 - Add custom category\n0 - Exit\n");
}

#[test]
fn test_income_expense_undo_session() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .arg("run")
        .write_stdin("2\n100\nFood\n1\n30\nTransport\n4\nTransport\n3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income of 100 added to category Food."))
        .stdout(predicate::str::contains("Expense of 30 added to category Transport."))
        .stdout(predicate::str::contains("Balance: 70"))
        .stdout(predicate::str::contains(
            "Amount: 30, Type: Expense, Category: Transport, Date: ",
        ))
        .stdout(predicate::str::contains("Last transaction removed."))
        .stdout(predicate::str::ends_with(
            "*** *** ***\n\nBalance: 100\nMenu:\n1 - Add expense\n2 - Add income\n3 - Undo last transaction\n4 - Show transaction history\n5 - Add custom category\n0 - Exit\n",
        ));
}

#[test]
fn test_validation_messages() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .write_stdin("1\nten\n1\n10\nGroceries\n5\n\n5\nFood\n3\n4\n\n7\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid amount."))
        .stdout(predicate::str::contains("Invalid category."))
        .stdout(predicate::str::contains("Invalid category name."))
        .stdout(predicate::str::contains("Category Food already exists."))
        .stdout(predicate::str::contains("No transactions to undo."))
        .stdout(predicate::str::contains("No transactions found."))
        .stdout(predicate::str::contains("Unknown command"));
}

#[test]
fn test_closed_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .write_stdin("5\nGifts\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Category Gifts added."));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .env("RUST_LOG", "debug")
        .write_stdin("2\n5\nOther\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("transaction added").not())
        .stderr(predicate::str::contains("transaction added"));
}

#[test]
fn test_init_then_config() {
    let dir = TempDir::new().unwrap();
    pocketbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));
    assert!(dir.path().join("config.json").exists());

    pocketbook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date format: %Y-%m-%d"))
        .stdout(predicate::str::contains("using defaults").not());
}

#[test]
fn test_settings_change_history_format() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"date_format":"day %d","separator":"~~~"}"#,
    )
    .unwrap();

    pocketbook(&dir)
        .write_stdin("2\n8\nOther\n4\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date: day "))
        .stdout(predicate::str::contains("~~~\n\n"));
}

#[test]
fn test_malformed_settings_fall_back_for_menu() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    pocketbook(&dir)
        .write_stdin("2\n40\nFood\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income of 40 added to category Food."))
        .stdout(predicate::str::contains("*** *** ***"))
        .stderr(predicate::str::contains("using default settings"));

    pocketbook(&dir).arg("config").assert().failure();
}

#[cfg(not(windows))]
#[test]
fn test_unresolvable_home_still_runs_menu() {
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env_remove("POCKETBOOK_DATA_DIR")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("HOME")
        .env_remove("RUST_LOG")
        .write_stdin("3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions to undo."))
        .stderr(predicate::str::contains("using default settings"));
}
