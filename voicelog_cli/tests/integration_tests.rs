//! Integration tests for the voicelog binary.
//!
//! These exercise the end-to-end path: argv -> engine -> rendered output,
//! including exit codes hosts rely on to distinguish ParseError from Unknown.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("voicelog"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health voice-command parser"));
}

#[test]
fn test_parse_water_json() {
    cli()
        .args(["parse", "drink 16 oz of water", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"intent\": \"water\""))
        .stdout(predicate::str::contains("\"amount_ml\": 473"));
}

#[test]
fn test_parse_meal_json() {
    cli()
        .args([
            "parse",
            "log 2 eggs and 1 cup rice for breakfast",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"meal_type\": \"breakfast\""))
        .stdout(predicate::str::contains("\"total_calories\": 270"));
}

#[test]
fn test_shorthand_without_subcommand() {
    cli()
        .args(["log", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("237 ml"));
}

#[test]
fn test_weight_without_value_exits_nonzero() {
    cli()
        .args(["parse", "log my weight"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("weight"));
}

#[test]
fn test_unknown_still_succeeds() {
    cli()
        .args(["parse", "what is the forecast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized"));
}

#[test]
fn test_no_text_is_usage_error() {
    cli().assert().code(2);
}

#[test]
fn test_intents_lists_cascade_order() {
    let assert = cli().arg("intents").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let water = stdout.find("water").expect("water listed");
    let meal = stdout.find("meal").expect("meal listed");
    assert!(water < meal, "water must be evaluated before meal");
}
