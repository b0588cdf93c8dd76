//! Per-step hue, lightness and chroma offsets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::STEP_COUNT;

/// One offset vector: a value per scale step.
pub type OffsetVector = [f64; STEP_COUNT];

/// Which of the three offset vectors an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetKind {
    /// Hue shift in degrees
    Hue,
    /// Lightness shift in hundredths of OKLCH lightness
    Lightness,
    /// Chroma shift in hundredths of OKLCH chroma
    Chroma,
}

impl OffsetKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 3] = [Self::Hue, Self::Lightness, Self::Chroma];

    /// Nominal slider range for a directly edited step.
    #[must_use]
    pub const fn slider_range(self) -> (f64, f64) {
        match self {
            Self::Hue => (-60.0, 60.0),
            Self::Lightness | Self::Chroma => (-40.0, 40.0),
        }
    }

    /// Clamp applied to neighbors touched by propagation.
    ///
    /// Narrower than the slider range: a direct edit may exceed it.
    #[must_use]
    pub const fn neighbor_bounds(self) -> (f64, f64) {
        match self {
            Self::Hue => (-30.0, 30.0),
            Self::Lightness | Self::Chroma => (-20.0, 20.0),
        }
    }

    /// Lowercase name as used in scripts and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Lightness => "lightness",
            Self::Chroma => "chroma",
        }
    }
}

impl fmt::Display for OffsetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OffsetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hue" | "h" => Ok(Self::Hue),
            "lightness" | "l" => Ok(Self::Lightness),
            "chroma" | "c" => Ok(Self::Chroma),
            other => Err(format!(
                "Unknown offset kind '{other}'. Expected hue, lightness or chroma"
            )),
        }
    }
}

/// The three offset vectors of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offsets {
    /// Hue offsets in degrees
    pub hue: OffsetVector,
    /// Lightness offsets (divided by 100 when applied)
    pub lightness: OffsetVector,
    /// Chroma offsets (divided by 100 when applied)
    pub chroma: OffsetVector,
}

impl Offsets {
    /// All offsets zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            hue: [0.0; STEP_COUNT],
            lightness: [0.0; STEP_COUNT],
            chroma: [0.0; STEP_COUNT],
        }
    }

    /// Returns the vector for one kind.
    #[must_use]
    pub const fn get(&self, kind: OffsetKind) -> &OffsetVector {
        match kind {
            OffsetKind::Hue => &self.hue,
            OffsetKind::Lightness => &self.lightness,
            OffsetKind::Chroma => &self.chroma,
        }
    }

    /// Returns the vector for one kind, mutably.
    pub fn get_mut(&mut self, kind: OffsetKind) -> &mut OffsetVector {
        match kind {
            OffsetKind::Hue => &mut self.hue,
            OffsetKind::Lightness => &mut self.lightness,
            OffsetKind::Chroma => &mut self.chroma,
        }
    }

    /// Zeroes one vector.
    pub fn reset(&mut self, kind: OffsetKind) {
        *self.get_mut(kind) = [0.0; STEP_COUNT];
    }

    /// True when every offset is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        OffsetKind::ALL
            .iter()
            .all(|&kind| self.get(kind).iter().all(|&v| v == 0.0))
    }

    /// True when every offset is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        OffsetKind::ALL
            .iter()
            .all(|&kind| self.get(kind).iter().all(|v| v.is_finite()))
    }
}

impl Default for Offsets {
    fn default() -> Self {
        Self::zero()
    }
}
