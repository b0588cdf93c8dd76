//! End-to-end tests for `tintscale palette` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_palette_list_empty() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["palette", "list"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No saved palettes"), "stdout: {stdout}");
}

#[test]
fn test_palette_list_and_show() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    write_palette_store(config_dir.path(), &[test_palette("Fixture Blue")]);

    let output = run_isolated(&["palette", "list"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(TEST_PALETTE_ID));
    assert!(stdout.contains("Fixture Blue"));

    let output = run_isolated(&["palette", "show", TEST_PALETTE_ID, "--json"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["name"], "Fixture Blue");
    assert_eq!(result["colors"].as_array().unwrap().len(), 11);
    assert_eq!(result["created_at"], "2025-01-01T12:00:00Z");
}

#[test]
fn test_palette_show_missing_is_validation_error() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["palette", "show", "nope"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_palette_delete() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    write_palette_store(config_dir.path(), &[test_palette("Doomed")]);

    let output = run_isolated(&["palette", "delete", TEST_PALETTE_ID], config_dir.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = run_isolated(&["palette", "list", "--json"], config_dir.path());
    assert_eq!(stdout_json(&output), serde_json::json!([]));

    let output = run_isolated(&["palette", "delete", TEST_PALETTE_ID], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}
