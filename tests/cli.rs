use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".passlog").join("config.json")
}

const BINARY_NAME: &str = "passlog";

fn passlog(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()); // simulate different $HOME
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Terminal password and links log"))
        .stdout(contains("keygen"));
}

#[test]
/// Keygen prints one base-36 key.
fn keygen_prints_base36_key() {
    let tmp = temp_home();
    passlog(&tmp)
        .arg("keygen")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-z]{2,26}\n$").unwrap());
}

#[test]
/// Config without flags prints defaults and writes nothing.
fn config_without_flags_prints_defaults() {
    let tmp = temp_home();
    passlog(&tmp)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("\"theme\": \"light\""))
        .stdout(contains("\"with_background_color\": true"));
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Config flags are written to the config file.
fn config_command_writes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    passlog(&tmp)
        .args(["config", "--theme", "dark", "--background", "false"])
        .assert()
        .success()
        .stdout(contains("Saved config"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"theme\": \"dark\""));
    assert!(saved.contains("\"with_background_color\": false"));

    passlog(&tmp)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("\"theme\": \"dark\""));
}

#[test]
/// A broken config file is reported, not replaced.
fn config_rejects_invalid_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    passlog(&tmp)
        .arg("config")
        .assert()
        .failure()
        .stderr(contains("ConfigFormat"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    passlog(&tmp)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Removing config file"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Reset without a config file is not an error.
fn reset_without_config_succeeds() {
    let tmp = temp_home();
    passlog(&tmp).arg("reset").assert().success();
}
