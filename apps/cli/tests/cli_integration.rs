//! CLI integration tests for saletax
//!
//! These run the real binary against purchase files in a temp directory and
//! check stdout, stderr and the exit status.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the saletax binary, isolated from the caller's env
fn saletax_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("saletax"));
    cmd.env_remove("SALETAX_BASIC_RATE_BPS")
        .env_remove("SALETAX_IMPORT_RATE_BPS")
        .env_remove("SALETAX_EXEMPT")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a purchase file and keep its directory alive with the returned guard
fn purchase_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("basket.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

// =============================================================================
// Receipt Output
// =============================================================================

#[test]
fn test_prints_receipt() {
    let (_dir, path) = purchase_file(
        "1 imported bottle of perfume at 27.99\n\
         1 bottle of perfume at 18.99\n\
         1 packet of headache pills at 9.75\n\
         3 imported boxes of chocolates at 11.25\n",
    );

    saletax_cmd().arg(&path).assert().success().stdout(
        "1 imported bottle of perfume: 32.19\n\
         1 bottle of perfume: 20.89\n\
         1 packet of headache pills: 9.75\n\
         3 imported boxes of chocolates: 35.55\n\
         Sales Taxes: 7.90\n\
         Total: 98.38\n",
    );
}

#[test]
fn test_bad_lines_are_reported_and_skipped() {
    let (_dir, path) = purchase_file("1 book at 12.49\nthis is not an item\n1 music CD at 14.99\n");

    saletax_cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout("1 book: 12.49\n1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 28.98\n")
        .stderr(predicate::str::contains("this is not an item"));
}

#[test]
fn test_json_output() {
    let (_dir, path) = purchase_file("1 music CD at 14.99\n");

    let output = saletax_cmd()
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 1649);
    assert_eq!(json["lines"][0]["name"], "music CD");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_rate_flags() {
    let (_dir, path) = purchase_file("1 book at 10.00\n");

    saletax_cmd()
        .arg(&path)
        .args(["--exempt", "none", "--basic-rate-bps", "2000"])
        .assert()
        .success()
        .stdout("1 book: 12.00\nSales Taxes: 2.00\nTotal: 12.00\n");
}

#[test]
fn test_rate_from_env() {
    let (_dir, path) = purchase_file("1 imported book at 10.00\n");

    saletax_cmd()
        .arg(&path)
        .env("SALETAX_IMPORT_RATE_BPS", "1000")
        .assert()
        .success()
        .stdout("1 imported book: 11.00\nSales Taxes: 1.00\nTotal: 11.00\n");
}

#[test]
fn test_invalid_config() {
    let (_dir, path) = purchase_file("1 book at 10.00\n");

    saletax_cmd()
        .arg(&path)
        .args(["--exempt", "toys"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Invalid value for exempt"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_missing_argument() {
    saletax_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();

    saletax_cmd()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: File not found"));
}

#[test]
fn test_empty_file() {
    let (_dir, path) = purchase_file("");

    saletax_cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No valid items to process"));
}

#[test]
fn test_no_usable_items() {
    let (_dir, path) = purchase_file("garbage\n0 book at 1.00\n");

    saletax_cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("2 line(s) skipped"));
}
