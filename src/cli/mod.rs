//! CLI command handlers for Tintscale.
//!
//! This module provides headless, scriptable access to scale generation,
//! editing sessions, saved palettes and configuration.

pub mod common;
pub mod config;
pub mod palette;
pub mod scale;
pub mod session;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use palette::PaletteArgs;
pub use scale::ScaleArgs;
pub use session::SessionArgs;
