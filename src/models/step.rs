//! Scale steps and their labels.
//!
//! A scale has eleven steps, numbered 0 (lightest) to 10 (darkest) and
//! labelled like Tailwind shades: 50, 100, 200, ..., 900, 950.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{ANCHOR_INDEX, SCALE_LABELS, STEP_COUNT};
use crate::error::SessionError;

/// A single position in the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Step(usize);

impl Step {
    /// The 500 step, anchored to the seed's own lightness.
    pub const ANCHOR: Self = Self(ANCHOR_INDEX);

    /// Creates a step from its index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidStep` if the index is greater than 10.
    pub fn new(index: usize) -> Result<Self, SessionError> {
        if index < STEP_COUNT {
            Ok(Self(index))
        } else {
            Err(SessionError::InvalidStep(index))
        }
    }

    /// Looks up the step carrying a scale label (e.g. 500 -> index 5).
    #[must_use]
    pub fn from_label(label: u16) -> Option<Self> {
        SCALE_LABELS.iter().position(|&l| l == label).map(Self)
    }

    /// Step index (0..=10).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Scale label (50..=950).
    #[must_use]
    pub const fn label(self) -> u16 {
        SCALE_LABELS[self.0]
    }

    /// Iterates over all steps from lightest to darkest.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..STEP_COUNT).map(Self)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
