mod common;

use std::fs;

use common::{read, TestEnv};
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn add_sale_reports_log_entry_and_persists() {
    let env = TestEnv::new();

    env.command(["sales", "add", "100"])
        .assert()
        .success()
        .stdout(contains("Added Sale: ₱100"));

    assert_eq!(read(&env.slot("sales")), "[100.0]");
    assert_eq!(read(&env.slot("logs")), r#"["Added Sale: ₱100"]"#);
}

#[test]
fn dashboard_shows_totals_and_balance() {
    let env = TestEnv::new();
    env.command(["sales", "add", "100"]).assert().success();
    env.command(["expenses", "add", "40"]).assert().success();

    env.command(["dashboard"])
        .assert()
        .success()
        .stdout(
            contains("Total Balance: ₱60")
                .and(contains("Sales: ₱100"))
                .and(contains("Expenses: ₱40")),
        );
}

#[test]
fn edit_and_delete_use_one_based_positions() {
    let env = TestEnv::new();
    env.command(["sales", "add", "10"]).assert().success();
    env.command(["sales", "add", "20"]).assert().success();

    env.command(["sales", "edit", "1", "15"])
        .assert()
        .success()
        .stdout(contains("Edited Sale: ₱15 at #1"));
    env.command(["sales", "delete", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted Sale: ₱20 at #2"));

    env.command(["sales"])
        .assert()
        .success()
        .stdout(contains("#1").and(contains("₱15")).and(contains("#2").not()));
}

#[test]
fn logs_are_listed_newest_first() {
    let env = TestEnv::new();
    env.command(["sales", "add", "5"]).assert().success();
    env.command(["expenses", "add", "2.5"]).assert().success();

    let output = env.command(["logs"]).output().expect("run logs");
    let stdout = String::from_utf8(output.stdout).expect("utf8");

    let newest = stdout.find("Added Expense: ₱2.5").expect("expense entry");
    let oldest = stdout.find("Added Sale: ₱5").expect("sale entry");
    assert!(newest < oldest, "newest entry must be printed first");
}

#[test]
fn invalid_amount_is_rejected_before_reaching_the_ledger() {
    let env = TestEnv::new();

    env.command(["sales", "add", "abc"])
        .assert()
        .failure()
        .stderr(contains("not a number"));
    env.command(["expenses", "add", "-5"])
        .assert()
        .failure()
        .stderr(contains("positive"));

    assert!(!env.slot("logs").exists());
}

#[test]
fn out_of_range_position_fails_without_writing() {
    let env = TestEnv::new();
    env.command(["sales", "add", "10"]).assert().success();
    let before = read(&env.slot("logs"));

    env.command(["sales", "delete", "3", "--yes"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
    env.command(["sales", "edit", "0", "5"])
        .assert()
        .failure()
        .stderr(contains("Positions start at 1"));

    assert_eq!(read(&env.slot("logs")), before);
}

#[test]
fn corrupt_data_is_reported_and_never_overwritten() {
    let env = TestEnv::new();
    fs::create_dir_all(env.data_dir()).unwrap();
    fs::write(env.slot("sales"), "{broken").unwrap();

    env.command(["sales"])
        .assert()
        .success()
        .stderr(contains("corrupt"))
        .stdout(contains("No sales recorded."));
    env.command(["sales", "add", "5"])
        .assert()
        .failure()
        .stderr(contains("Refusing to modify"));

    assert_eq!(read(&env.slot("sales")), "{broken");
}

#[test]
fn config_file_can_point_at_the_data_directory() {
    let env = TestEnv::new();
    let custom = env.dir.path().join("custom");
    fs::write(
        env.config_path(),
        format!(r#"{{"data_dir": {:?}}}"#, custom.display().to_string()),
    )
    .unwrap();

    assert_cmd::Command::cargo_bin(common::BIN_NAME)
        .unwrap()
        .args(["--no-color", "--config"])
        .arg(env.config_path())
        .args(["expenses", "add", "7"])
        .assert()
        .success();

    assert!(custom.join("expenses.json").exists());
}

#[test]
fn failed_save_keeps_stored_slots_consistent() {
    let env = TestEnv::new();
    env.command(["sales", "add", "10"]).assert().success();
    fs::create_dir(env.data_dir().join("logs.json.tmp")).unwrap();

    env.command(["sales", "add", "5"])
        .assert()
        .failure()
        .stdout(contains("Added Sale: ₱5"))
        .stderr(contains("not saved"));

    assert_eq!(read(&env.slot("sales")), "[10.0]");
    assert_eq!(read(&env.slot("logs")), r#"["Added Sale: ₱10"]"#);
    env.command(["sales"])
        .assert()
        .success()
        .stdout(contains("#2").not());
}

#[test]
fn deletes_skip_confirmation_when_config_disables_it() {
    let env = TestEnv::new();
    fs::write(env.config_path(), r#"{"confirm_deletes": false}"#).unwrap();
    env.command(["sales", "add", "10"]).assert().success();

    env.command(["sales", "delete", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted Sale: ₱10 at #1"));

    assert_eq!(read(&env.slot("sales")), "[]");
}

#[test]
fn delete_without_a_terminal_to_confirm_changes_nothing() {
    let env = TestEnv::new();
    env.command(["expenses", "add", "4"]).assert().success();
    let logs_before = read(&env.slot("logs"));

    env.command(["expenses", "delete", "1"])
        .assert()
        .failure()
        .stderr(contains("Prompt failed"));

    assert_eq!(read(&env.slot("expenses")), "[4.0]");
    assert_eq!(read(&env.slot("logs")), logs_before);
}

#[test]
fn diagnostics_default_to_info_without_ansi_codes() {
    let env = TestEnv::new();

    env.command(["sales", "add", "3"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(contains("ledger loaded").and(contains("\u{1b}[").not()));
}
