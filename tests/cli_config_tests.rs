//! End-to-end tests for `tintscale config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["config", "show"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Lightness Ceiling"));
    assert!(stdout.contains("Debounce: 500 ms"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["config", "show", "--json"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["paths"]["config_file"].is_string());
    assert!(result["paths"]["palette_store"]
        .as_str()
        .unwrap()
        .ends_with("palettes.json"));
    assert_eq!(result["scale"]["lightness_ceiling"], 1.0);
    assert_eq!(result["scale"]["darken_damping"], 1.0);
    assert_eq!(result["scale"]["clamp_recomputed"], false);
    assert_eq!(result["history"]["debounce_ms"], 500);
    assert_eq!(result["session"]["default_seed"], "#3b82f6");
}

#[test]
fn test_config_path_uses_override_dir() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["config", "path"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = config_dir.path().join("config.toml");
    assert_eq!(stdout.trim(), expected.display().to_string());
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_and_show() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(
        &[
            "config",
            "set",
            "--darken-damping",
            "0.8",
            "--clamp-recomputed",
            "true",
            "--debounce-ms",
            "250",
            "--default-seed",
            "teal",
        ],
        config_dir.path(),
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let output = run_isolated(&["config", "show", "--json"], config_dir.path());
    let result = stdout_json(&output);
    assert_eq!(result["scale"]["darken_damping"], 0.8);
    assert_eq!(result["scale"]["clamp_recomputed"], true);
    assert_eq!(result["history"]["debounce_ms"], 250);
    assert_eq!(result["session"]["default_seed"], "teal");
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["config", "set"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run_isolated(&["config", "set", "--lightness-ceiling", "1.5"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));

    let output = run_isolated(&["config", "set", "--default-seed", "not-a-color"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));

    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_palette_store_override() {
    let config_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let store_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let store_path = store_dir.path().join("mine.json");

    let output = run_isolated(
        &["config", "set", "--palette-store", store_path.to_str().unwrap()],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));

    let script_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let script = write_script(&script_dir, "save Elsewhere\n");
    let output = run_isolated(
        &["session", "--script", script.to_str().unwrap()],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(store_path.exists());
    assert!(!config_dir.path().join("palettes.json").exists());
}
