//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// Binary with every database variable cleared and no `.env` in reach.
fn registrar() -> Command {
    let mut cmd = Command::cargo_bin("registrar").unwrap();
    cmd.current_dir(std::env::temp_dir());
    for key in [
        "DATABASE_URL",
        "DB_HOST",
        "DB_PORT",
        "DB_NAME",
        "DB_USER",
        "DB_PASS",
        "DB_MAX_CONNECTIONS",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

// === Help Tests ===

#[test]
fn test_top_level_help() {
    registrar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("db"));
}

#[test]
fn test_serve_help() {
    registrar()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--cors-permissive"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_db_help() {
    registrar()
        .arg("db")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn test_db_reset_help() {
    registrar()
        .arg("db")
        .arg("reset")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Load fixture rows"));
}

// === Failure Tests ===

#[test]
fn test_db_without_configuration_fails() {
    let dir = tempfile::tempdir().unwrap();

    registrar()
        .current_dir(dir.path())
        .arg("db")
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_invalid_bind_address_is_rejected() {
    registrar()
        .arg("serve")
        .arg("--bind")
        .arg("not-an-address")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unknown_subcommand_fails() {
    registrar().arg("enroll").assert().failure();
}

#[test]
fn test_zero_max_connections_is_rejected() {
    registrar()
        .arg("db")
        .arg("--max-connections")
        .arg("0")
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
