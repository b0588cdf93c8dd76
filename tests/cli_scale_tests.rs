//! End-to-end tests for `tintscale scale`.

mod fixtures;
use fixtures::*;

#[test]
fn test_scale_human_readable() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["scale", "#3b82f6"], temp_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Scale should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 11, "One line per step: {stdout}");
    assert!(lines[0].trim_start().starts_with("50"));
    assert!(lines[5].contains("#3b82f6"), "Anchor is the seed: {}", lines[5]);
    assert!(lines[10].trim_start().starts_with("950"));
}

#[test]
fn test_scale_json_structure() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["scale", "rgb(239, 68, 68)", "--json"], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["seed"], "rgb(239, 68, 68)");
    let steps = result["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 11);

    let labels: Vec<u64> = steps.iter().map(|s| s["label"].as_u64().unwrap()).collect();
    assert_eq!(labels, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]);
    assert_eq!(steps[5]["hex"], "#ef4444");

    // Lightness never increases towards the dark end
    let lightness: Vec<f64> = steps
        .iter()
        .map(|s| s["oklch"][0].as_f64().unwrap())
        .collect();
    assert!(lightness.windows(2).all(|w| w[0] >= w[1]), "{lightness:?}");
}

#[test]
fn test_scale_accepts_named_and_oklch_colors() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    for color in ["teal", "oklch(0.7 0.15 140)", "hsl(30, 80%, 50%)", "#abc"] {
        let output = run_isolated(&["scale", color, "--json"], temp_dir.path());
        assert_eq!(
            output.status.code(),
            Some(0),
            "{color} should be accepted. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_scale_invalid_color_is_validation_error() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["scale", "#ggg"], temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid color"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_scale_uses_configured_ceiling() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["config", "set", "--lightness-ceiling", "0.95"], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let output = run_isolated(&["scale", "#3b82f6", "--json"], temp_dir.path());
    let result = stdout_json(&output);
    let lightest = result["steps"][0]["oklch"][0].as_f64().unwrap();
    assert!((lightest - 0.95).abs() < 1e-9, "lightest = {lightest}");
}

#[test]
fn test_step_rows_are_usable_from_the_library() {
    use tintscale::cli::scale::{step_rows, StepOutput};
    use tintscale::color_space::OkSpace;
    use tintscale::engine::{ScaleGenerator, ScaleSettings};

    let space = OkSpace::new();
    let scale = ScaleGenerator::new(&space, ScaleSettings::default())
        .generate("#3b82f6")
        .expect("valid seed");
    let rows: Vec<StepOutput> = step_rows(&space, scale.colors());

    assert_eq!(rows.len(), 11);
    assert_eq!(rows[5].label, 500);
    assert_eq!(rows[5].hex, "#3b82f6");
    assert_eq!(rows[0].hex, "#ffffff");
}
