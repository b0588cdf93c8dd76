//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Lightness of the 50 step, in (0, 1]
    #[arg(long, value_name = "L")]
    lightness_ceiling: Option<f64>,

    /// Darkening strength at the 950 step, in (0, 1]
    #[arg(long, value_name = "FACTOR")]
    darken_damping: Option<f64>,

    /// Clamp adjusted lightness and chroma (true or false)
    #[arg(long, value_name = "BOOL")]
    clamp_recomputed: Option<bool>,

    /// Undo checkpoint debounce in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Default seed color for sessions
    #[arg(long, value_name = "COLOR")]
    default_seed: Option<String>,

    /// Saved palette file
    #[arg(long, value_name = "FILE")]
    palette_store: Option<PathBuf>,
}

/// Configuration with its resolved paths, for display
#[derive(Debug)]
struct ConfigOutput<'a> {
    paths: PathsOutput,
    config: &'a Config,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    config_file: String,
    palette_store: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to locate config file: {e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let paths = PathsOutput {
            config_file: display_path(Config::config_file_path())?,
            palette_store: display_path(config.palette_store_path())?,
        };

        if self.json {
            // Resolved paths replace the optional overrides
            let mut value = serde_json::to_value(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            value["paths"] = serde_json::to_value(&paths)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
            print_json(&value)
        } else {
            output_human_readable(&ConfigOutput {
                paths,
                config: &config,
            });
            Ok(())
        }
    }
}

fn display_path(path: anyhow::Result<PathBuf>) -> CliResult<String> {
    path.map(|p| p.display().to_string())
        .map_err(|e| CliError::io(format!("Failed to resolve path: {e:#}")))
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.lightness_ceiling.is_none()
            && self.darken_damping.is_none()
            && self.clamp_recomputed.is_none()
            && self.debounce_ms.is_none()
            && self.default_seed.is_none()
            && self.palette_store.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --lightness-ceiling, \
                 --darken-damping, --clamp-recomputed, --debounce-ms, --default-seed or --palette-store",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(value) = self.lightness_ceiling {
            config.scale.lightness_ceiling = value;
        }
        if let Some(value) = self.darken_damping {
            config.scale.darken_damping = value;
        }
        if let Some(value) = self.clamp_recomputed {
            config.scale.clamp_recomputed = value;
        }
        if let Some(value) = self.debounce_ms {
            config.history.debounce_ms = value;
        }
        if let Some(seed) = &self.default_seed {
            config.session.default_seed = seed.trim().to_string();
        }
        if let Some(path) = &self.palette_store {
            config.paths.palette_store = Some(path.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput<'_>) {
    let config = output.config;

    println!("Tintscale Configuration");
    println!("=======================");
    println!();

    println!("Paths:");
    println!("  Config File:   {}", output.paths.config_file);
    println!("  Palette Store: {}", output.paths.palette_store);
    println!();

    println!("Scale:");
    println!("  Lightness Ceiling: {}", config.scale.lightness_ceiling);
    println!("  Darken Damping:    {}", config.scale.darken_damping);
    println!("  Clamp Recomputed:  {}", config.scale.clamp_recomputed);
    println!();

    println!("History:");
    println!("  Debounce: {} ms", config.history.debounce_ms);
    println!();

    println!("Session:");
    println!("  Default Seed: {}", config.session.default_seed);
    println!();
}
