//! Tintscale Library
//!
//! This library derives 11-step OKLCH color scales from a seed color, applies
//! equalizer-style per-step adjustments, keeps a debounced undo/redo history
//! and persists named palettes.

// Module declarations
pub mod cli;
pub mod color_space;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
