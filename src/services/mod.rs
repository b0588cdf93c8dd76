//! Service layer around the engine.
//!
//! This module contains the collaborators a session relies on but does not
//! own: palette persistence and color naming.

pub mod naming;
pub mod palette_store;

// Re-export commonly used types
pub use naming::{ColorNamer, HueNamer};
pub use palette_store::{JsonPaletteStore, MemoryPaletteStore, PaletteStore};
