//! Shared CLI error and exit code types.

use std::fmt;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unparseable color, invalid script line, failed validation
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was rejected
    Validation,
    /// Reading or writing failed
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => f.write_str("validation"),
            Self::Io => f.write_str("io"),
        }
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CliError {
    /// Failure category, decides the exit code
    pub kind: ErrorKind,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Reading or writing failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Validation => ExitCode::ValidationError,
            ErrorKind::Io => ExitCode::IoError,
        }
    }
}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
