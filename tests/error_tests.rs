//! Error scenario integration tests

use std::process::Command;

fn ocr_desk_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ocr-desk"))
}

#[test]
fn config_get_unknown_key() {
    let output = ocr_desk_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = ocr_desk_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let output = ocr_desk_bin()
        .args(["config", "set", "notify", "maybe"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false") || stderr.contains("boolean"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_set_empty_command() {
    let home = tempfile::tempdir().unwrap();
    let output = ocr_desk_bin()
        .args(["config", "set", "command", "  "])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("command"),
        "Expected error about the command value, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    // Config list works even without a config file (uses empty config)
    let output = ocr_desk_bin()
        .args(["config", "list"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("command"));
    assert!(stdout.contains("notify"));
}

#[test]
fn daemon_command_without_daemon_running() {
    let home = tempfile::tempdir().unwrap();
    let output = ocr_desk_bin()
        .args(["daemon", "status"])
        .env("XDG_RUNTIME_DIR", home.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No daemon running"),
        "Expected error about missing daemon, got: {}",
        stderr
    );
}
