//! Error types for color handling and session transitions.
//!
//! The scale engine reports failures as typed errors so callers can decide
//! whether to keep their previous state. Application plumbing (config,
//! persistence, CLI) wraps these in `anyhow` or `CliError`.

use thiserror::Error;

use crate::models::OffsetKind;

/// Failure to parse or convert a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input text is not a color the adapter understands.
    #[error("invalid color '{input}': {reason}")]
    InvalidColor {
        /// The rejected input, trimmed
        input: String,
        /// Human-readable cause
        reason: String,
    },
    /// The conversion rejected numerically valid but malformed coordinates.
    #[error("color conversion failed: {0}")]
    Conversion(String),
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.trim().to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure to apply an event to a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Seed parsing or recomputation failed.
    #[error(transparent)]
    Color(#[from] ColorError),
    /// Step index outside 0..=10.
    #[error("step index {0} is out of range (expected 0..=10)")]
    InvalidStep(usize),
    /// Offset value that is NaN or infinite.
    #[error("{kind} offset {value} is not a finite number")]
    InvalidOffset {
        /// Offset vector being edited
        kind: OffsetKind,
        /// Rejected value
        value: f64,
    },
    /// A saved palette that cannot be restored.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),
}
