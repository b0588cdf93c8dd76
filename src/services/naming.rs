//! Human-readable color names.
//!
//! Used to give saved palettes a default name. Only the hue family matters
//! here, so the lookup works on OKLCH coordinates directly.
//!
//! [`HueNamer`] is a coarse stand-in for a nearest-named-color lookup: it
//! knows twelve hue families plus white, gray and black. Plug a richer
//! [`ColorNamer`] into the session for finer names.

use crate::models::Oklch;

/// Chroma below which a color is treated as neutral.
const NEUTRAL_CHROMA: f64 = 0.03;

/// Hue families as (exclusive upper bound in degrees, name), ascending.
const HUE_FAMILIES: [(f64, &str); 12] = [
    (15.0, "Rose"),
    (45.0, "Red"),
    (75.0, "Orange"),
    (115.0, "Yellow"),
    (150.0, "Lime"),
    (170.0, "Green"),
    (210.0, "Teal"),
    (240.0, "Sky"),
    (275.0, "Blue"),
    (295.0, "Indigo"),
    (315.0, "Violet"),
    (345.0, "Magenta"),
];

/// Looks up a display name for a color.
pub trait ColorNamer: std::fmt::Debug {
    /// Returns a short name such as "Blue" or "Gray".
    fn name(&self, color: Oklch) -> String;
}

/// Names colors by hue family, with neutral names for low-chroma colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct HueNamer;

impl ColorNamer for HueNamer {
    fn name(&self, color: Oklch) -> String {
        if color.c.abs() < NEUTRAL_CHROMA {
            let name = if color.l >= 0.95 {
                "White"
            } else if color.l <= 0.15 {
                "Black"
            } else {
                "Gray"
            };
            return name.to_string();
        }

        HUE_FAMILIES
            .iter()
            .find(|(upper, _)| color.h < *upper)
            .map_or("Rose", |(_, name)| name)
            .to_string()
    }
}
