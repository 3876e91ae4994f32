//! Integration tests for the faq-chat binary's startup path.
//! Every case fails before the terminal is touched, so no TTY is needed.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn faq_chat() -> Command {
    let mut cmd = Command::from(cargo_bin_cmd!("faq-chat"));
    cmd.env_remove("FAQ_CHAT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_config_flag_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.yaml");

    faq_chat()
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"))
        .stderr(predicate::str::contains("nowhere.yaml"));
}

#[test]
fn missing_config_from_env_var_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("from-env.yaml");

    faq_chat()
        .env("FAQ_CHAT_CONFIG", &missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("from-env.yaml"));
}

#[test]
fn malformed_yaml_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "backend: [unclosed\n");

    faq_chat()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn bad_base_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "backend:\n  base_url: \"not a url\"\n");

    faq_chat()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid backend URL"));
}

#[test]
fn debug_flag_creates_configured_log_directory() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let path = write_config(
        &dir,
        &format!(
            "backend:\n  base_url: \"ftp://example.com\"\nlogging:\n  directory: \"{}\"\n",
            logs.display()
        ),
    );

    faq_chat()
        .arg("--config")
        .arg(&path)
        .arg("--debug")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid backend URL"));

    assert!(logs.is_dir(), "log directory should exist: {}", logs.display());
}

#[test]
fn help_lists_flags() {
    faq_chat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--debug"))
        .stdout(predicate::str::contains("--log-level"));
}
