use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let scan = common::write_fixture(dir.path(), "scan.json", common::SCAN_JSON);
    let assignments =
        common::write_fixture(dir.path(), "assignments.json", common::ASSIGNMENTS_JSON);

    let mut cmd = Command::new(cargo_bin!("patungan"));
    cmd.arg(&assignments)
        .arg("--scan")
        .arg(&scan)
        .args(["--tax", "10", "--service", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("participant,amount"))
        .stdout(predicate::str::contains("alice,4025"))
        .stdout(predicate::str::contains("bob,17825"))
        .stdout(predicate::str::contains("(subtotal),19000"))
        .stdout(predicate::str::contains("(total billed),21850"));
}

#[test]
fn test_cli_mock_scan() {
    let dir = tempfile::tempdir().unwrap();
    let assignments =
        common::write_fixture(dir.path(), "assignments.json", common::ASSIGNMENTS_JSON);

    // The mock extractor returns the same receipt as the scan fixture, so the
    // amounts match the end-to-end run.
    let mut cmd = Command::new(cargo_bin!("patungan"));
    cmd.arg(&assignments)
        .arg("--mock-scan")
        .args(["--tax", "10", "--service", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alice,4025"))
        .stdout(predicate::str::contains("bob,17825"));
}

#[test]
fn test_cli_code_fenced_scan() {
    let dir = tempfile::tempdir().unwrap();
    let fenced = format!("```json\n{}\n```", common::SCAN_JSON);
    let scan = common::write_fixture(dir.path(), "scan.json", &fenced);
    let assignments =
        common::write_fixture(dir.path(), "assignments.json", common::ASSIGNMENTS_JSON);

    let mut cmd = Command::new(cargo_bin!("patungan"));
    cmd.arg(&assignments).arg("--scan").arg(&scan);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alice,3500"))
        .stdout(predicate::str::contains("bob,15500"));
}

#[test]
fn test_cli_orphan_redistribution_flag() {
    let dir = tempfile::tempdir().unwrap();
    let scan = common::write_fixture(dir.path(), "scan.json", common::SCAN_JSON);
    // Second line left unclaimed.
    let assignments = common::write_fixture(
        dir.path(),
        "assignments.json",
        r#"{"participants": ["alice", "bob"], "assignments": [["alice", "bob"], []]}"#,
    );

    // Default: the 12000 line is absorbed, each pays half of 7000.
    let mut cmd = Command::new(cargo_bin!("patungan"));
    cmd.arg(&assignments).arg("--scan").arg(&scan);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alice,3500"))
        .stdout(predicate::str::contains("(total billed),7000"));

    // Redistributed: each also picks up half of the unclaimed 12000.
    let mut cmd = Command::new(cargo_bin!("patungan"));
    cmd.arg(&assignments)
        .arg("--scan")
        .arg(&scan)
        .arg("--redistribute-orphans");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("alice,9500"))
        .stdout(predicate::str::contains("bob,9500"))
        .stdout(predicate::str::contains("(total billed),19000"));
}

#[test]
fn test_cli_requires_scan_or_mock() {
    let dir = tempfile::tempdir().unwrap();
    let assignments =
        common::write_fixture(dir.path(), "assignments.json", common::ASSIGNMENTS_JSON);

    let mut cmd = Command::new(cargo_bin!("patungan"));
    cmd.arg(&assignments);
    cmd.assert().failure();
}
