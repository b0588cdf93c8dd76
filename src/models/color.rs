//! Color coordinate types shared by the color space adapter and the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gamma-encoded sRGB color with f64 channels.
///
/// Channels are nominally in `0.0..=1.0`, but values outside that range are
/// kept as-is so out-of-gamut results of OKLCH math can be inspected.
pub type Srgb = palette::Srgb<f64>;

/// Wraps a hue in degrees into `[0, 360)`.
///
/// `rem_euclid` can round tiny negative inputs up to exactly 360.0, which is
/// folded back to 0.0.
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// OKLCH coordinates: lightness (0..1), chroma (0..~0.4), hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Perceptual lightness
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue angle in degrees
    pub h: f64,
}

impl Oklch {
    /// Creates OKLCH coordinates without normalizing anything.
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Returns true if all three coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.c.is_finite() && self.h.is_finite()
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.2})", self.l, self.c, self.h)
    }
}

/// HSL coordinates: hue in degrees, saturation and lightness in percent (0..100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl Hsl {
    /// Creates HSL coordinates.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// A color value as produced by a [`ColorSpace`](crate::color_space::ColorSpace).
///
/// Colors are stored canonically as OKLCH coordinates so that values derived
/// by the scale engine keep their exact coordinates; conversion to sRGB and
/// hex happens only at the display edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Oklch);

impl Color {
    pub(crate) const fn from_coords(oklch: Oklch) -> Self {
        Self(oklch)
    }

    pub(crate) const fn coords(&self) -> Oklch {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
