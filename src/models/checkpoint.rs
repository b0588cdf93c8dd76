//! History checkpoint snapshots.

use super::{Color, Offsets};

/// One committed snapshot of the displayed colors and the offsets that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    /// Displayed colors, lightest to darkest
    pub colors: Vec<Color>,
    /// Offset vectors at the time of the snapshot
    pub offsets: Offsets,
}

impl Checkpoint {
    /// Creates a checkpoint.
    #[must_use]
    pub fn new(colors: Vec<Color>, offsets: Offsets) -> Self {
        Self { colors, offsets }
    }
}
