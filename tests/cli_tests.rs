mod common;

use assert_fs::prelude::*;
use common::CliHarness;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;
use serde_json::Value;

#[test]
fn period_for_ad_hoc_card() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["period", "--closing", "15", "--date", "2025-02-10"])
        .assert()
        .success()
        .stdout(contains("February 2025 statement"))
        .stdout(contains("2025-01-16"))
        .stdout(contains("2025-02-15"))
        .stdout(contains("Length (days)   : 31"))
        .stdout(contains("Days remaining"));
}

#[test]
fn period_json_carries_precision() {
    let harness = CliHarness::new();
    let stdout = harness.run_ok(&["period", "--closing=15", "--date=2025-02-10", "--json"]);
    let value: Value = serde_json::from_str(&stdout).expect("json output");

    assert_eq!(value["precision"], "exact");
    assert_eq!(value["value"]["start"], "2025-01-16");
    assert_eq!(value["value"]["end"], "2025-02-15");
    assert_eq!(value["value"]["days_remaining"], 5);
}

#[test]
fn launch_uses_wrapped_due_day() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["launch", "--closing", "28", "--date", "2025-08-22"])
        .assert()
        .success()
        .stdout(contains("falls due on 2025-09-07"));
}

#[test]
fn preview_json_reports_deferral() {
    let harness = CliHarness::new();
    let stdout = harness.run_ok(&[
        "preview", "--closing", "28", "--date", "2025-08-22", "--json",
    ]);
    let value: Value = serde_json::from_str(&stdout).expect("json output");

    assert_eq!(value["value"]["launch_date"], "2025-09-07");
    assert_eq!(value["value"]["launch_label"], "September 2025");
    assert_eq!(value["value"]["is_deferred"], true);
}

#[test]
fn invalid_card_degrades_with_warning() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["period", "--closing", "45", "--date", "2025-04-10"])
        .assert()
        .success()
        .stdout(contains("2025-04-30"))
        .stderr(contains("fallback precision"));
}

#[test]
fn validate_rejects_due_equal_to_closing() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["validate", "--closing", "15", "--due", "15"])
        .assert()
        .failure()
        .stderr(contains("due day must differ from closing day"));
}

#[test]
fn defaults_wrap_past_month_end() {
    let harness = CliHarness::new();
    let stdout = harness.run_ok(&["defaults", "--closing", "25", "--json"]);
    let value: Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(value["due_day"], 4);
    assert_eq!(value["preferred_purchase_day"], 26);
}

#[test]
fn defaults_and_best_day_agree_on_out_of_range_preference() {
    let harness = CliHarness::new();
    let stdout = harness.run_ok(&["defaults", "--closing", "15", "--preferred", "50", "--json"]);
    let value: Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(value["preferred_purchase_day"], 16);

    harness
        .cmd()
        .args(["best-day", "--closing", "15", "--preferred", "50"])
        .assert()
        .success()
        .stdout(contains("best day to buy is day 16"));
}

#[test]
fn best_day_follows_closing_day() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["best-day", "--closing", "15"])
        .assert()
        .success()
        .stdout(contains("best day to buy is day 16"));
}

#[test]
fn saved_card_becomes_default_and_persists() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["card", "add", "Everyday", "--closing", "15", "--due", "25"])
        .assert()
        .success()
        .stdout(contains("Card `Everyday` saved"));

    harness
        .home()
        .child("config/config.json")
        .assert(predicate::path::exists())
        .assert(contains("\"Everyday\""));

    harness
        .cmd()
        .args(["summary", "--date", "2025-02-10"])
        .assert()
        .success()
        .stdout(contains("Everyday: February 2025 statement"))
        .stdout(contains("2025-02-25"));

    harness
        .cmd()
        .args(["next-due", "--card", "everyday", "--date", "2025-02-26"])
        .assert()
        .success()
        .stdout(contains("next payment due on 2025-03-25"));

    harness
        .cmd()
        .args(["card", "list"])
        .assert()
        .success()
        .stdout(contains("* Everyday (closes on 15, due on 25)"));
}

#[test]
fn adding_invalid_card_is_refused() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["card", "add", "Broken", "--closing", "32"])
        .assert()
        .failure()
        .stderr(contains("closing day must be between 1 and 31"));

    harness
        .home()
        .child("config/config.json")
        .assert(predicate::path::missing());
}

#[test]
fn removing_unknown_card_fails() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["card", "remove", "Ghost"])
        .assert()
        .failure()
        .stderr(contains("Card not found: Ghost"));
}

#[test]
fn missing_card_selection_is_reported() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["period", "--date", "2025-02-10"])
        .assert()
        .failure()
        .stderr(contains("no card selected"));
}

#[test]
fn malformed_date_is_rejected() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .args(["period", "--closing", "15", "--date", "10/02/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date `10/02/2025`"));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .arg("perod")
        .assert()
        .failure()
        .stdout(contains("Suggestion: `period`?"))
        .stderr(contains("Unknown command `perod`"));
}

#[test]
fn config_backup_and_restore_round_trip() {
    let harness = CliHarness::new();
    harness.run_ok(&["card", "add", "Travel", "--closing", "3"]);
    let stdout = harness.run_ok(&["config", "backup", "first", "card"]);
    let name = stdout
        .split_whitespace()
        .find(|token| token.starts_with("config_"))
        .expect("backup name printed")
        .to_string();
    assert!(name.ends_with("_first-card.json"));

    harness.run_ok(&["card", "remove", "travel"]);
    harness
        .cmd()
        .args(["config", "restore", name.as_str()])
        .assert()
        .success()
        .stdout(contains("Configuration restored"));
    harness
        .cmd()
        .args(["card", "list"])
        .assert()
        .success()
        .stdout(contains("Travel"));
}

#[test]
fn version_prints_semver() {
    let harness = CliHarness::new();
    let stdout = harness.run_ok(&["version"]);
    let pattern = Regex::new(r"cardcycle \d+\.\d+\.\d+").expect("regex");
    assert!(pattern.is_match(&stdout), "unexpected output: {stdout}");
}

#[test]
fn help_lists_commands() {
    let harness = CliHarness::new();
    harness
        .cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(contains("period"))
        .stdout(contains("preview"))
        .stdout(contains("card"));
}
