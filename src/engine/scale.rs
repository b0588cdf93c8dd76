//! Base scale generation from a seed color.
//!
//! The seed is converted to OKLCH and spread over eleven steps by lightness
//! alone: steps lighter than 500 move linearly towards a lightness ceiling,
//! steps darker than 500 move linearly towards black (optionally damped).
//! Chroma and hue are carried over from the seed unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color_space::ColorSpace;
use crate::constants::STEP_COUNT;
use crate::error::ColorError;
use crate::models::{Color, Oklch, Step};

/// Lightness reached by the 50 step.
pub const DEFAULT_LIGHTNESS_CEILING: f64 = 1.0;

/// Fraction of the seed lightness removed at the 950 step.
pub const DEFAULT_DARKEN_DAMPING: f64 = 1.0;

/// Distance in label units between the anchor (500) and either end (50 / 950).
const LABEL_SPAN: f64 = 450.0;

/// Shape parameters of the lightness ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleSettings {
    /// Target lightness for the lightest step, in (0, 1]
    pub lightness_ceiling: f64,
    /// Darkening strength for the darkest step, in (0, 1]
    pub darken_damping: f64,
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            lightness_ceiling: DEFAULT_LIGHTNESS_CEILING,
            darken_damping: DEFAULT_DARKEN_DAMPING,
        }
    }
}

impl ScaleSettings {
    /// Lightness of the step with `label` for a seed of lightness `l0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintscale::engine::ScaleSettings;
    ///
    /// let settings = ScaleSettings::default();
    /// assert_eq!(settings.step_lightness(0.6, 500), 0.6);
    /// assert!((settings.step_lightness(0.6, 950) - 0.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn step_lightness(&self, l0: f64, label: u16) -> f64 {
        let label = f64::from(label);
        if label < 500.0 {
            let factor = (500.0 - label) / LABEL_SPAN;
            l0 + (self.lightness_ceiling - l0) * factor
        } else if label > 500.0 {
            let factor = (label - 500.0) / LABEL_SPAN;
            l0 * (1.0 - factor * self.darken_damping)
        } else {
            l0
        }
    }
}

/// The eleven colors derived from one seed, lightest first.
///
/// Immutable: a new seed produces a new `BaseScale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseScale {
    colors: [Color; STEP_COUNT],
}

impl BaseScale {
    /// All colors, indexed by step.
    #[must_use]
    pub const fn colors(&self) -> &[Color; STEP_COUNT] {
        &self.colors
    }

    /// The color at one step.
    #[must_use]
    pub const fn get(&self, step: Step) -> &Color {
        &self.colors[step.index()]
    }

    /// Hex strings of all colors.
    pub fn hex<S: ColorSpace + ?Sized>(&self, space: &S) -> Vec<String> {
        self.colors.iter().map(|c| space.to_hex(c)).collect()
    }
}

/// Derives base scales from seed colors.
#[derive(Debug)]
pub struct ScaleGenerator<'a, S: ColorSpace + ?Sized> {
    space: &'a S,
    settings: ScaleSettings,
}

impl<'a, S: ColorSpace + ?Sized> ScaleGenerator<'a, S> {
    /// Creates a generator using the given adapter and ramp settings.
    pub const fn new(space: &'a S, settings: ScaleSettings) -> Self {
        Self { space, settings }
    }

    /// Parses `seed` and generates its scale.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidColor` if the seed cannot be parsed.
    pub fn generate(&self, seed: &str) -> Result<BaseScale, ColorError> {
        let color = self.space.parse(seed)?;
        self.generate_from(&color)
    }

    /// Generates the scale of an already parsed seed.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Conversion` if the adapter rejects a derived coordinate.
    pub fn generate_from(&self, seed: &Color) -> Result<BaseScale, ColorError> {
        let Oklch { l, c, h } = self.space.to_oklch(seed);

        let mut colors = [*seed; STEP_COUNT];
        for step in Step::all() {
            let lightness = self.settings.step_lightness(l, step.label());
            colors[step.index()] = self.space.from_oklch(Oklch::new(lightness, c, h))?;
        }

        debug!(seed = %seed, "generated base scale");
        Ok(BaseScale { colors })
    }
}
