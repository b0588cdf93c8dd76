//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::color_space::{ColorSpace, OkSpace};
use crate::constants::{APP_BINARY_NAME, DEFAULT_DEBOUNCE_MS, DEFAULT_SEED};
use crate::engine::{ScaleSettings, SessionSettings};
use crate::engine::scale::{DEFAULT_DARKEN_DAMPING, DEFAULT_LIGHTNESS_CEILING};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TINTSCALE_CONFIG_DIR";

/// Upper bound for the debounce window, in milliseconds.
const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Saved palette file (defaults to `palettes.json` in the config directory)
    pub palette_store: Option<PathBuf>,
}

/// Scale generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Lightness of the 50 step, in (0, 1]
    pub lightness_ceiling: f64,
    /// Darkening strength at the 950 step, in (0, 1]
    pub darken_damping: f64,
    /// Clamp adjusted lightness to [0, 1] and chroma to [0, 0.4]
    pub clamp_recomputed: bool,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            lightness_ceiling: DEFAULT_LIGHTNESS_CEILING,
            darken_damping: DEFAULT_DARKEN_DAMPING,
            clamp_recomputed: false,
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Quiet period in milliseconds before edits become an undo step
    pub debounce_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Session defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed color used when none is given
    pub default_seed: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_seed: DEFAULT_SEED.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/tintscale/config.toml`
/// - macOS: `~/Library/Application Support/tintscale/config.toml`
/// - Windows: `%APPDATA%\tintscale\config.toml`
///
/// `TINTSCALE_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - `lightness_ceiling` and `darken_damping` must lie in (0, 1]
/// - `debounce_ms` must not exceed 10 seconds
/// - `default_seed` must be a parseable color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Scale generation settings
    pub scale: ScaleConfig,
    /// Undo history settings
    pub history: HistoryConfig,
    /// Session defaults
    pub session: SessionConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `TINTSCALE_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `tintscale`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolves the saved palette file.
    pub fn palette_store_path(&self) -> Result<PathBuf> {
        match &self.paths.palette_store {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("palettes.json")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let in_unit_range = |v: f64| v > 0.0 && v <= 1.0;

        if !in_unit_range(self.scale.lightness_ceiling) {
            anyhow::bail!(
                "scale.lightness_ceiling must be in (0, 1], got {}",
                self.scale.lightness_ceiling
            );
        }

        if !in_unit_range(self.scale.darken_damping) {
            anyhow::bail!(
                "scale.darken_damping must be in (0, 1], got {}",
                self.scale.darken_damping
            );
        }

        if self.history.debounce_ms > MAX_DEBOUNCE_MS {
            anyhow::bail!(
                "history.debounce_ms must be at most {MAX_DEBOUNCE_MS}, got {}",
                self.history.debounce_ms
            );
        }

        OkSpace::new()
            .parse(&self.session.default_seed)
            .context("session.default_seed is not a valid color")?;

        Ok(())
    }

    /// Session settings derived from this configuration.
    #[must_use]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            scale: ScaleSettings {
                lightness_ceiling: self.scale.lightness_ceiling,
                darken_damping: self.scale.darken_damping,
            },
            clamp_recomputed: self.scale.clamp_recomputed,
            debounce: Duration::from_millis(self.history.debounce_ms),
        }
    }
}
