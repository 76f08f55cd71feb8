//! Binary Exit Tests
//!
//! Run the compiled `mpu_plot` binary where no capture file exists, so it
//! fails before any window is opened.

use std::process::Command;
use tempfile::TempDir;

#[test]
fn missing_capture_exits_non_zero_and_reports_once() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mpu_plot"))
        .current_dir(dir.path())
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("CSV file not found").count(), 1, "{stderr}");
    assert!(stderr.contains("mpu_plot failed"));
}

#[test]
fn invalid_config_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("mpu_plot.toml"), "[plot\nline_width = ").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mpu_plot"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Invalid config").count(), 1, "{stderr}");
}
