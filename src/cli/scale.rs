//! Base scale command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::color_space::{ColorSpace, OkSpace};
use crate::config::Config;
use crate::engine::{BaseScale, ScaleGenerator};
use crate::models::{Color, Step};
use clap::Args;
use serde::Serialize;

/// Print the 11-step scale generated from a seed color
#[derive(Debug, Clone, Args)]
pub struct ScaleArgs {
    /// Seed color (hex, rgb(), hsl(), oklch() or a CSS name)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One step of a printed scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutput {
    /// Scale label (50..950)
    pub label: u16,
    /// `#rrggbb` color
    pub hex: String,
    /// OKLCH coordinates as `[l, c, h]`
    pub oklch: [f64; 3],
}

#[derive(Debug, Serialize)]
struct ScaleOutput {
    seed: String,
    steps: Vec<StepOutput>,
}

impl ScaleArgs {
    /// Execute the scale command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let space = OkSpace::new();
        let settings = config.session_settings();
        let scale = ScaleGenerator::new(&space, settings.scale)
            .generate(&self.color)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            print_json(&ScaleOutput {
                seed: self.color.trim().to_string(),
                steps: step_rows(&space, scale.colors()),
            })
        } else {
            print_scale(&space, &scale);
            Ok(())
        }
    }
}

/// Builds the per-step rows for any 11-color sequence.
pub fn step_rows<S: ColorSpace + ?Sized>(space: &S, colors: &[Color]) -> Vec<StepOutput> {
    Step::all()
        .zip(colors)
        .map(|(step, color)| {
            let lch = space.to_oklch(color);
            StepOutput {
                label: step.label(),
                hex: space.to_hex(color),
                oklch: [lch.l, lch.c, lch.h],
            }
        })
        .collect()
}

/// Prints one line per step: label, hex and OKLCH coordinates.
pub(crate) fn print_colors<S: ColorSpace + ?Sized>(space: &S, colors: &[Color]) {
    for row in step_rows(space, colors) {
        let [l, c, h] = row.oklch;
        println!(
            "{:>4}  {}  oklch({:.4} {:.4} {:.2})",
            row.label, row.hex, l, c, h
        );
    }
}

fn print_scale(space: &OkSpace, scale: &BaseScale) {
    print_colors(space, scale.colors());
}
