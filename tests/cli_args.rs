//! Tests for the binary's command line surface.

use std::process::Command;

fn colorpage_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_colorpage"))
}

#[test]
fn test_help_lists_options() {
    let output = colorpage_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--model", "--export-dir", "--prompt"] {
        assert!(stdout.contains(flag), "missing {flag} in help: {stdout}");
    }
}

#[test]
fn test_version_flag() {
    let output = colorpage_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[generation]\nmodel = \"\"\n").unwrap();

    let output = colorpage_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("generation.model must not be empty"), "{stderr}");
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = colorpage_cmd()
        .arg("--backend")
        .arg("x")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
