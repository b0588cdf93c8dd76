//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed shape of a color scale.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Tintscale";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "tintscale";

/// Number of steps in a generated scale.
pub const STEP_COUNT: usize = 11;

/// Scale labels from lightest (50) to darkest (950), one per step index.
pub const SCALE_LABELS: [u16; STEP_COUNT] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Index of the 500 step, whose lightness equals the seed's own lightness.
pub const ANCHOR_INDEX: usize = 5;

/// Seed color used when nothing else is configured.
pub const DEFAULT_SEED: &str = "#3b82f6";

/// Quiet period before a burst of edits becomes one history checkpoint.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
