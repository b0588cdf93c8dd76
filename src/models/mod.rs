//! Data models for colors, scale steps, offsets and saved palettes.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of the scale engine and of any user interface.

pub mod checkpoint;
pub mod color;
pub mod offsets;
pub mod palette;
pub mod step;

// Re-export all model types
pub use checkpoint::Checkpoint;
pub use color::{normalize_hue, Color, Hsl, Oklch, Srgb};
pub use offsets::{OffsetKind, OffsetVector, Offsets};
pub use palette::SavedPalette;
pub use step::Step;
