//! End-to-end tests for the `eplan` binary
//!
//! Fixture files are written with the library's own models so the JSON
//! on disk matches what a real boundary layer would hand over.

use assert_cmd::Command;
use chrono::NaiveDate;
use predicates::prelude::*;
use tempfile::TempDir;

use envelope_planner::models::{
    DebtKind, DebtLiability, Envelope, Frequency, Money, PriorityTier,
};

fn eplan(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eplan").unwrap();
    cmd.env("EPLAN_DATA_DIR", config_dir.path());
    cmd
}

fn write_json<T: serde::Serialize>(dir: &TempDir, name: &str, value: &T) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

/// The worked paycheck example: per-pay 1500/1800/500 with the Car Fund
/// behind by 150 on 2025-06-16 under a fortnightly cycle.
fn example_envelopes() -> Vec<Envelope> {
    vec![
        Envelope::new(
            "Rent",
            PriorityTier::Essential,
            Money::from_major(3000),
            Frequency::Monthly,
        )
        .with_per_pay(Money::from_major(1500))
        .with_balance(Money::from_major(2000))
        .with_due(due()),
        Envelope::new(
            "Living",
            PriorityTier::Important,
            Money::from_major(600),
            Frequency::Monthly,
        )
        .with_per_pay(Money::from_major(1800))
        .with_balance(Money::from_major(400))
        .with_due(due()),
        Envelope::new(
            "Car Fund",
            PriorityTier::Important,
            Money::from_major(450),
            Frequency::Monthly,
        )
        .with_per_pay(Money::from_major(500))
        .with_balance(Money::from_major(150))
        .with_due(due()),
    ]
}

#[test]
fn health_renders_table() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "envelopes.json", &example_envelopes());

    eplan(&dir)
        .args(["health", "--envelopes"])
        .arg(&file)
        .args(["--cycle", "fortnightly", "--date", "2025-06-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Envelope Health"))
        .stdout(predicate::str::contains("Car Fund"))
        .stdout(predicate::str::contains("behind"));
}

#[test]
fn health_json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "envelopes.json", &example_envelopes());

    let output = eplan(&dir)
        .args(["health", "--envelopes"])
        .arg(&file)
        .args(["--cycle", "fortnightly", "--date", "2025-06-16", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

#[test]
fn payday_reports_surplus_and_top_up() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "envelopes.json", &example_envelopes());

    eplan(&dir)
        .args(["payday", "4200", "--envelopes"])
        .arg(&file)
        .args(["--cycle", "fortnightly", "--date", "2025-06-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Surplus available:"))
        .stdout(predicate::str::contains("$400.00"))
        .stdout(predicate::str::contains("Top up 'Car Fund'"));
}

#[test]
fn payday_rejects_malformed_amount() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "envelopes.json", &example_envelopes());

    eplan(&dir)
        .args(["payday", "lots", "--envelopes"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn scenario_canned_by_name() {
    let dir = TempDir::new().unwrap();
    let mut envelopes = example_envelopes();
    envelopes.push(
        Envelope::new(
            "Dining Out",
            PriorityTier::Discretionary,
            Money::from_major(300),
            Frequency::Monthly,
        )
        .with_per_pay(Money::from_major(150))
        .with_due(due()),
    );
    let file = write_json(&dir, "envelopes.json", &envelopes);

    eplan(&dir)
        .args(["scenario", "--envelopes"])
        .arg(&file)
        .args(["--name", "dining", "--cycle", "fortnightly", "--date", "2025-06-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cut dining out"))
        .stdout(predicate::str::contains("Dining Out"));
}

#[test]
fn scenario_custom_requires_parameters() {
    let dir = TempDir::new().unwrap();
    let file = write_json(&dir, "envelopes.json", &example_envelopes());

    eplan(&dir)
        .args(["scenario", "--envelopes"])
        .arg(&file)
        .args(["--tiers", "discretionary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reduction"));
}

#[test]
fn scenarios_lists_canned_library() {
    let dir = TempDir::new().unwrap();

    eplan(&dir)
        .args(["scenarios", "--cycle", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pause discretionary spending"))
        .stdout(predicate::str::contains("3 pays"));
}

#[test]
fn payoff_single_debt() {
    let dir = TempDir::new().unwrap();
    let debts = vec![DebtLiability::new(
        "Visa",
        Money::from_major(1000),
        12.0,
        DebtKind::CreditCard,
    )
    .with_minimum(Money::from_major(30))];
    let file = write_json(&dir, "debts.json", &debts);

    eplan(&dir)
        .args(["payoff", "--debts"])
        .arg(&file)
        .args(["--budget", "100", "--from", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snowball strategy"))
        .stdout(predicate::str::contains("Visa"));
}

#[test]
fn payoff_comparison_and_csv_export() {
    let dir = TempDir::new().unwrap();
    let debts = vec![DebtLiability::new(
        "Visa",
        Money::from_major(1000),
        12.0,
        DebtKind::CreditCard,
    )
    .with_minimum(Money::from_major(30))];
    let file = write_json(&dir, "debts.json", &debts);
    let csv_path = dir.path().join("history.csv");

    eplan(&dir)
        .args(["payoff", "--debts"])
        .arg(&file)
        .args(["--budget", "30", "--extra", "70", "--from", "2025-06-01", "--csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("months sooner"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("month,balance"));
}

#[test]
fn payoff_empty_basket_is_not_a_crash() {
    let dir = TempDir::new().unwrap();
    let debts: Vec<DebtLiability> = Vec::new();
    let file = write_json(&dir, "debts.json", &debts);

    eplan(&dir)
        .args(["payoff", "--debts"])
        .arg(&file)
        .args(["--budget", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to simulate"));
}

#[test]
fn invalid_envelope_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("envelopes.json");
    std::fs::write(&path, "{not json").unwrap();

    eplan(&dir)
        .args(["health", "--envelopes"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn config_shows_paths_and_defaults() {
    let dir = TempDir::new().unwrap();

    eplan(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default pay cycle: fortnightly"))
        .stdout(predicate::str::contains("settings.yaml"));
}
