//! Tintscale - perceptual color scale generator
//!
//! Generates 11-step OKLCH scales from a seed color and replays scripted
//! editing sessions with undo/redo and saved palettes.

use clap::{Parser, Subcommand};
use tintscale::cli::{ConfigArgs, ExitCode, PaletteArgs, ScaleArgs, SessionArgs};
use tintscale::constants::APP_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tintscale - perceptual color scale generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the 11-step scale of a seed color
    Scale(ScaleArgs),
    /// Run a scripted editing session
    Session(SessionArgs),
    /// Manage saved palettes
    Palette(PaletteArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Scale(args) => args.execute(),
        Command::Session(args) => args.execute(),
        Command::Palette(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("{APP_NAME} error: {e}");
        std::process::exit(e.exit_code().code());
    }
    std::process::exit(ExitCode::Success.code());
}
