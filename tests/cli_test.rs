//! Integration tests for the install-helper binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Fake Program Files with the given SDK directories.
fn program_files(versions: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let sdk = temp.path().join("dotnet").join("sdk");
    fs::create_dir_all(&sdk).unwrap();
    for version in versions {
        fs::create_dir_all(sdk.join(version)).unwrap();
    }
    temp
}

fn install_helper() -> Command {
    let mut cmd = Command::new(cargo_bin("install-helper"));
    cmd.env_remove("INSTALL_HELPER_TOKEN").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    install_helper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("detects whether the .NET 7 SDK is present"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    install_helper()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_finds_matching_sdk() -> Result<(), Box<dyn std::error::Error>> {
    let pf = program_files(&["6.0.400", "7.0.100"]);
    install_helper()
        .args(["check", "--root"])
        .arg(pf.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Found 7.0.100"));
    Ok(())
}

#[test]
fn check_without_match_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let pf = program_files(&["6.0.400"]);
    install_helper()
        .args(["check", "--root"])
        .arg(pf.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No matching SDK"));
    Ok(())
}

#[test]
fn check_missing_sdk_dir_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    install_helper()
        .args(["check", "--root"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Cannot read"));
    Ok(())
}

#[test]
fn check_token_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let pf = program_files(&["8.0.100"]);
    install_helper()
        .env("INSTALL_HELPER_TOKEN", "8.0")
        .args(["check", "--root"])
        .arg(pf.path())
        .assert()
        .code(0);
    Ok(())
}

#[test]
fn check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let pf = program_files(&["7.0.203"]);
    let output = install_helper()
        .args(["check", "--json", "--root"])
        .arg(pf.path())
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["installed"], true);
    assert_eq!(json["outcome"]["status"], "installed");
    assert_eq!(json["outcome"]["entry"], "7.0.203");
    Ok(())
}

#[test]
fn check_quiet_prints_nothing_on_success() -> Result<(), Box<dyn std::error::Error>> {
    let pf = program_files(&["7.0.100"]);
    install_helper()
        .args(["check", "--quiet", "--root"])
        .arg(pf.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[cfg(not(windows))]
#[test]
fn default_check_without_special_folder_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    install_helper()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("SHGetSpecialFolderPath"));
    Ok(())
}

#[test]
fn list_marks_matching_entries() -> Result<(), Box<dyn std::error::Error>> {
    let pf = program_files(&["6.0.400", "7.0.100"]);
    install_helper()
        .args(["list", "--root"])
        .arg(pf.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 7.0.100"))
        .stdout(predicate::str::contains("2 entries, 1 matching '7.0'"));
    Ok(())
}

#[test]
fn list_unreadable_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    install_helper()
        .args(["list", "--root"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot enumerate"));
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    install_helper()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install-helper"));
    Ok(())
}

#[test]
fn rejects_empty_token() -> Result<(), Box<dyn std::error::Error>> {
    install_helper()
        .args(["check", "--token", ""])
        .assert()
        .failure();
    Ok(())
}
