//! Saved palettes: named, timestamped copies of a session.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Offsets;
use crate::constants::STEP_COUNT;

/// Maximum length of a palette name, in characters.
pub const MAX_NAME_LEN: usize = 80;

/// A named snapshot of (seed, offsets, displayed colors).
///
/// Palettes are created on explicit save and never mutated afterwards.
///
/// # Validation
///
/// - Name must be non-empty, max 80 characters
/// - Exactly 11 colors, each a `#rrggbb` hex string
/// - All offsets finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// Opaque identifier (UUID v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Seed color text the scale was generated from
    pub seed: String,
    /// Displayed colors as hex strings, lightest to darkest
    pub colors: Vec<String>,
    /// Offsets in effect when the palette was saved
    pub offsets: Offsets,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl SavedPalette {
    /// Creates a new palette with a fresh id and the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintscale::models::{Offsets, SavedPalette};
    ///
    /// let colors = vec!["#3b82f6".to_string(); 11];
    /// let palette = SavedPalette::new("Blue", "#3b82f6", colors, Offsets::zero()).unwrap();
    /// assert_eq!(palette.name, "Blue");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the name, colors or offsets fail validation.
    pub fn new(
        name: impl Into<String>,
        seed: impl Into<String>,
        colors: Vec<String>,
        offsets: Offsets,
    ) -> Result<Self> {
        let palette = Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            seed: seed.into(),
            colors,
            offsets,
            created_at: Utc::now(),
        };
        palette.validate()?;
        Ok(palette)
    }

    /// Checks name, colors and offsets.
    pub fn validate(&self) -> Result<()> {
        Self::validate_name(&self.name)?;

        if self.colors.len() != STEP_COUNT {
            anyhow::bail!(
                "Palette '{}' must have {} colors (got {})",
                self.name,
                STEP_COUNT,
                self.colors.len()
            );
        }

        for color in &self.colors {
            color
                .trim()
                .parse::<palette::Srgb<u8>>()
                .map_err(|e| anyhow::anyhow!("Palette '{}' has invalid color '{color}': {e}", self.name))?;
        }

        if !self.offsets.is_finite() {
            anyhow::bail!("Palette '{}' has non-finite offsets", self.name);
        }

        Ok(())
    }

    /// Validates the palette name.
    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Palette name cannot be empty");
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            anyhow::bail!(
                "Palette name '{name}' exceeds maximum length of {MAX_NAME_LEN} characters (got {len})"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<String> {
        vec!["#3b82f6".to_string(); STEP_COUNT]
    }

    #[test]
    fn test_new_valid() {
        let palette = SavedPalette::new("Ocean", "#3b82f6", colors(), Offsets::zero()).unwrap();
        assert_eq!(palette.name, "Ocean");
        assert_eq!(palette.seed, "#3b82f6");
        assert!(Uuid::parse_str(&palette.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = SavedPalette::new("A", "#000", colors(), Offsets::zero()).unwrap();
        let b = SavedPalette::new("A", "#000", colors(), Offsets::zero()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_invalid_name() {
        assert!(SavedPalette::new("", "#000", colors(), Offsets::zero()).is_err());
        assert!(SavedPalette::new("   ", "#000", colors(), Offsets::zero()).is_err());
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(SavedPalette::new(long, "#000", colors(), Offsets::zero()).is_err());
    }

    #[test]
    fn test_invalid_colors() {
        assert!(SavedPalette::new("A", "#000", vec![], Offsets::zero()).is_err());

        let mut bad = colors();
        bad[3] = "not-a-color".to_string();
        let err = SavedPalette::new("A", "#000", bad, Offsets::zero()).unwrap_err();
        assert!(err.to_string().contains("not-a-color"));

        let mut short = colors();
        short[0] = "#abc".to_string();
        assert!(SavedPalette::new("A", "#000", short, Offsets::zero()).is_ok());
    }

    #[test]
    fn test_non_finite_offsets() {
        let mut offsets = Offsets::zero();
        offsets.hue[0] = f64::NAN;
        assert!(SavedPalette::new("A", "#000", colors(), offsets).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let palette = SavedPalette::new("Ocean", "#3b82f6", colors(), Offsets::zero()).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        let back: SavedPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }
}
