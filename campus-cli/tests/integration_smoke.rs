//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's environment, `.env` and home config.
fn campus(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("campus").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("CAMPUS_BIND");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let home = tempfile::tempdir().unwrap();
    campus(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let home = tempfile::tempdir().unwrap();
    campus(&home)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_help() {
    let home = tempfile::tempdir().unwrap();
    campus(&home)
        .args(["migrate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let home = tempfile::tempdir().unwrap();
    campus(&home)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_invalid_config_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("campus.toml");
    std::fs::write(&path, "bind = 42\n").unwrap();

    campus(&home)
        .arg("--config")
        .arg(&path)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_bind_address_rejected() {
    let home = tempfile::tempdir().unwrap();
    campus(&home)
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
