#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
//! Integration tests for the bw CLI commands.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bw() -> Command {
    let mut cmd = Command::cargo_bin("bw").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn play_json(args: &[&str]) -> serde_json::Value {
    let output = bw()
        .args(["play", "--inquisitor", "Mercy", "--beast", "The Grave Wolf", "--json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// -- locations --

#[test]
fn locations_table() {
    bw().arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Royal Exchange"))
        .stdout(predicate::str::contains("Burying Ground"))
        .stdout(predicate::str::contains("8 locations"));
}

#[test]
fn locations_json() {
    let output = bw().args(["locations", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["locations"].as_array().unwrap().len(), 8);
    assert_eq!(json["connections"]["I"], serde_json::json!(["II", "III"]));
}

// -- catalog --

#[test]
fn catalog_lists_everything() {
    bw().arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Holy Water"))
        .stdout(predicate::str::contains("Beast Slayer's Axe"))
        .stdout(predicate::str::contains("Ritual Invocation"))
        .stdout(predicate::str::contains("True Name Ritual"));
}

// -- name --

#[test]
fn name_is_reproducible() {
    let first = bw().args(["name", "--seed", "7"]).output().unwrap();
    let second = bw().args(["name", "--seed", "7"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).starts_with("The "));
}

// -- play --

#[test]
fn play_summary() {
    bw().args(["play", "--inquisitor", "Mercy", "--seed", "42", "move:II", "complete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 2"))
        .stdout(predicate::str::contains("Game Log"))
        .stdout(predicate::str::contains("Mercy travels from The Royal Exchange"));
}

#[test]
fn play_seed_42_is_deterministic() {
    let a = play_json(&["--seed", "42", "move:II", "complete"]);
    let b = play_json(&["--seed", "42", "move:II", "complete"]);
    assert_eq!(a["seed"], 42);
    assert_eq!(a["day"], 2);
    assert_eq!(a["actions_remaining"], 2);
    assert_eq!(a["inquisitor"]["location"], "II");
    assert_eq!(a["beast"], b["beast"]);
    assert_eq!(a["movements"], b["movements"]);
    assert_eq!(a["draws"], b["draws"]);
}

#[test]
fn play_investigation_and_hooks() {
    let json = play_json(&[
        "--seed",
        "3",
        "stage:howling near the Exchange",
        "investigate",
        "acquire-weapon:wep1",
        "acquire-ward:w3",
        "discover:6",
    ]);
    assert_eq!(json["rumors"].as_array().unwrap().len(), 1);
    assert_eq!(json["rumors"][0]["note"], "howling near the Exchange");
    assert_eq!(json["inquisitor"]["knowledge"], 40);
    assert_eq!(json["readiness"], 85);
    assert_eq!(json["readiness_tier"], "well_prepared");
    assert_eq!(json["actions_remaining"], 1);
}

#[test]
fn play_from_script() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("hunt.txt");
    fs::write(
        &script,
        "# first day\nmove:III\nmove:IV\n\ncomplete\n",
    )
    .unwrap();

    let json = play_json(&["--seed", "11", "--script", script.to_str().unwrap()]);
    assert_eq!(json["inquisitor"]["location"], "IV");
    assert_eq!(json["day"], 2);
}

#[test]
fn play_illegal_move_fails() {
    bw().args(["play", "--inquisitor", "Mercy", "--seed", "1", "move:VII"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: step 1 (move:VII)"))
        .stderr(predicate::str::contains("not adjacent"));
}

#[test]
fn play_unknown_action_fails() {
    bw().args(["play", "--inquisitor", "Mercy", "dance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown action type"));
}

#[test]
fn play_combat_outside_fight_fails() {
    bw().args(["play", "--inquisitor", "Mercy", "--seed", "1", "combat:6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal state"));
}

#[test]
fn play_missing_script_fails() {
    bw().args(["play", "--inquisitor", "Mercy", "--script", "/nonexistent/hunt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read script"));
}

#[test]
fn play_requires_inquisitor() {
    bw().arg("play").assert().failure();
}

#[test]
fn blank_inquisitor_is_rejected() {
    bw().args(["play", "--inquisitor", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
