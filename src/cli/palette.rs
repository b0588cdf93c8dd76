//! Saved palette commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::SCALE_LABELS;
use crate::models::SavedPalette;
use crate::services::{JsonPaletteStore, PaletteStore};
use clap::{Args, Subcommand};

/// Saved palette management
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(subcommand)]
    command: PaletteCommand,
}

#[derive(Subcommand, Debug)]
enum PaletteCommand {
    /// List saved palettes
    List(PaletteListArgs),
    /// Show one saved palette
    Show(PaletteShowArgs),
    /// Delete a saved palette
    Delete(PaletteDeleteArgs),
}

/// List saved palettes
#[derive(Args, Debug)]
pub struct PaletteListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one saved palette
#[derive(Args, Debug)]
pub struct PaletteShowArgs {
    /// Palette id
    #[arg(value_name = "ID")]
    id: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Delete a saved palette
#[derive(Args, Debug)]
pub struct PaletteDeleteArgs {
    /// Palette id
    #[arg(value_name = "ID")]
    id: String,
}

impl PaletteArgs {
    /// Execute palette subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PaletteCommand::List(args) => args.execute(),
            PaletteCommand::Show(args) => args.execute(),
            PaletteCommand::Delete(args) => args.execute(),
        }
    }
}

/// Opens the palette store named by the configuration.
pub(crate) fn open_store(config: &Config) -> CliResult<JsonPaletteStore> {
    let path = config
        .palette_store_path()
        .map_err(|e| CliError::io(format!("Failed to locate palette store: {e:#}")))?;
    Ok(JsonPaletteStore::open(path))
}

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

impl PaletteListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store(&load_config()?)?;

        if self.json {
            return print_json(&store.list());
        }

        if store.list().is_empty() {
            println!("No saved palettes.");
            return Ok(());
        }

        for palette in store.list() {
            println!(
                "{}  {}  {}  {}",
                palette.id,
                palette.created_at.format("%Y-%m-%d %H:%M:%S"),
                palette.seed,
                palette.name
            );
        }
        Ok(())
    }
}

impl PaletteShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store(&load_config()?)?;
        let palette = store
            .get(&self.id)
            .ok_or_else(|| CliError::validation(format!("Palette not found: {}", self.id)))?;

        if self.json {
            print_json(palette)
        } else {
            print_palette(palette);
            Ok(())
        }
    }
}

impl PaletteDeleteArgs {
    /// Execute delete command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_store(&load_config()?)?;
        let removed = store
            .delete(&self.id)
            .map_err(|e| CliError::io(format!("Failed to delete palette: {e:#}")))?;

        if !removed {
            return Err(CliError::validation(format!("Palette not found: {}", self.id)));
        }

        println!("Deleted palette {}", self.id);
        Ok(())
    }
}

fn print_palette(palette: &SavedPalette) {
    println!("{}", palette.name);
    println!("  Id:      {}", palette.id);
    println!("  Seed:    {}", palette.seed);
    println!("  Created: {}", palette.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    println!("  Step  Color    Hue     Light   Chroma");
    for (i, (label, hex)) in SCALE_LABELS.iter().zip(&palette.colors).enumerate() {
        println!(
            "  {:>4}  {}  {:>6.1}  {:>6.1}  {:>6.1}",
            label,
            hex,
            palette.offsets.hue[i],
            palette.offsets.lightness[i],
            palette.offsets.chroma[i]
        );
    }
}
