//! CLI integration tests for the server binary.
//!
//! Tests:
//! - `--help` output lists the expected options
//! - `--version` reports the crate version

use std::process::Command;

/// `--help` output should show expected options.
#[test]
fn test_cli_help_output() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "pulsecheck", "--", "--help"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("--port"),
        "help should mention --port option"
    );
    assert!(
        stdout.contains("--otel-endpoint"),
        "help should mention --otel-endpoint option"
    );
    assert!(
        stdout.contains("--database"),
        "help should mention --database option"
    );
    assert!(
        stdout.contains("--log-level"),
        "help should mention --log-level option"
    );
}

/// `--version` should show the crate version.
#[test]
fn test_cli_version_output() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "pulsecheck", "--", "--version"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("0.1.0"),
        "version output should contain version number: {}",
        stdout
    );
}
