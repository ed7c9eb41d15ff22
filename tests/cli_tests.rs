//! CLI integration tests

use std::fs;
use std::process::Command;

fn ocr_desk_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ocr-desk"))
}

/// Point every base directory the app touches into the temp dir
fn isolate_env(cmd: &mut Command, home: &std::path::Path) {
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env_remove("OCR_DESK_COMMAND");
}

#[test]
fn help_output() {
    let output = ocr_desk_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OCR"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--notify"));
    assert!(stdout.contains("--daemon"));
    assert!(stdout.contains("--autostart"));
    assert!(stdout.contains("--applications"));
}

#[test]
fn version_output() {
    let output = ocr_desk_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ocr-desk"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let output = ocr_desk_bin()
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ocr-desk"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = ocr_desk_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn daemon_help() {
    let output = ocr_desk_bin()
        .args(["daemon", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("select"));
    assert!(stdout.contains("save"));
    assert!(stdout.contains("status"));
}

#[test]
fn no_input_is_a_usage_error() {
    let output = ocr_desk_bin()
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No input file"),
        "Expected error about missing input, got: {}",
        stderr
    );
}

#[test]
fn daemon_conflicts_with_input() {
    let output = ocr_desk_bin()
        .args(["--daemon", "scan.pdf"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot be used with") || stderr.contains("conflict"),
        "Expected conflict error, got: {}",
        stderr
    );
}

#[test]
fn unsupported_extension_is_rejected_before_any_job() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("notes.txt");
    fs::write(&input, "plain text").unwrap();

    let mut cmd = ocr_desk_bin();
    isolate_env(&mut cmd, home.path());
    let output = cmd.arg(&input).output().expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported file type"),
        "Expected gate rejection, got: {}",
        stderr
    );
}

#[test]
fn oneshot_with_silent_stub_completes_cleanly() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("scan.pdf");
    fs::write(&input, "%PDF-1.4").unwrap();

    // `true` exits 0 with empty streams: no dialog, just completion
    let mut cmd = ocr_desk_bin();
    isolate_env(&mut cmd, home.path());
    let output = cmd
        .arg(&input)
        .args(["--ocr-command", "true"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("scan.ocr.pdf"),
        "Expected suggested destination on stdout, got: {}",
        stdout
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Error output"));
    assert!(!stderr.contains("All OK"));
}

#[test]
fn oneshot_missing_tool_reports_the_diagnostic() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("scan.pdf");
    fs::write(&input, "%PDF-1.4").unwrap();

    let mut cmd = ocr_desk_bin();
    isolate_env(&mut cmd, home.path());
    let output = cmd
        .arg(&input)
        .args(["--ocr-command", "ocr-desk-no-such-command"])
        .output()
        .expect("Failed to execute command");

    // The diagnostic flows through the stderr stream, which surfaces in
    // the informational dialog, identical to a tool failure
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not installed"),
        "Expected missing-tool diagnostic, got: {}",
        stderr
    );
    assert!(stderr.contains("All OK - Work ended!"));
}

#[test]
fn oneshot_stdout_from_the_tool_becomes_the_error_dialog() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("scan.pdf");
    fs::write(&input, "%PDF-1.4").unwrap();

    // `echo` writes the two paths to stdout, which drives the error dialog
    let mut cmd = ocr_desk_bin();
    isolate_env(&mut cmd, home.path());
    let output = cmd
        .arg(&input)
        .args(["--ocr-command", "echo"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error output"),
        "Expected error dialog title, got: {}",
        stderr
    );
    assert!(stderr.contains("scan.pdf"));
}

#[test]
fn oneshot_honors_explicit_destination() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("scan.pdf");
    fs::write(&input, "%PDF-1.4").unwrap();
    let dest = home.path().join("result");

    let mut cmd = ocr_desk_bin();
    isolate_env(&mut cmd, home.path());
    let output = cmd
        .arg(&input)
        .arg("-o")
        .arg(&dest)
        .args(["--ocr-command", "true"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("result.pdf"),
        "Expected the destination to gain the pdf extension, got: {}",
        stdout
    );
}
