//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use chrono::{TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use tintscale::models::{Offsets, SavedPalette};

/// Fixed id of the palette created by [`test_palette`].
pub const TEST_PALETTE_ID: &str = "00000000-0000-4000-8000-000000000001";

/// Path to the tintscale binary
pub fn tintscale_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tintscale")
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to share state between commands in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(tintscale_bin());
    cmd.env("TINTSCALE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in an isolated config directory.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, panicking with stderr on failure.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON output ({e}). stdout: {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// A saved palette with deterministic id and timestamp.
pub fn test_palette(name: &str) -> SavedPalette {
    let mut offsets = Offsets::zero();
    offsets.hue[5] = 10.0;
    offsets.hue[4] = 8.0;
    offsets.hue[6] = 8.0;

    SavedPalette {
        id: TEST_PALETTE_ID.to_string(),
        name: name.to_string(),
        seed: "#3b82f6".to_string(),
        colors: vec![
            "#ffffff", "#dde9ff", "#bbd2ff", "#98bcff", "#74a6ff", "#3b82f6", "#2f6bcc",
            "#2254a1", "#163c76", "#0a244b", "#000000",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        offsets,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
    }
}

/// Writes palettes to `palettes.json` in the config directory.
pub fn write_palette_store(config_dir: &Path, palettes: &[SavedPalette]) -> PathBuf {
    let path = config_dir.join("palettes.json");
    let content = serde_json::to_string_pretty(palettes).expect("serialize palettes");
    fs::write(&path, content).expect("write palette store");
    path
}

/// Writes a session script into a temp directory.
pub fn write_script(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("session.txt");
    fs::write(&path, content).expect("write script");
    path
}
