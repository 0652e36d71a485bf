//! Errors surfaced by the `libris` binary and the exit code for each.

use libris::Error as LibError;
use std::fmt;

/// A rejected operation: not found, duplicate, unavailable or cancelled.
pub const EXIT_REJECTED: i32 = 1;
/// Input that failed validation.
pub const EXIT_INVALID_INPUT: i32 = 4;
/// Filesystem or terminal I/O failure.
pub const EXIT_IO: i32 = 5;
/// `SQLite` failure.
pub const EXIT_STORAGE: i32 = 6;
/// Unreadable or invalid configuration.
pub const EXIT_CONFIG: i32 = 7;

/// Error returned by command handlers.
#[derive(Debug)]
pub enum CliError {
    /// An error from the catalog library.
    Library(LibError),

    /// Reading stdin or writing stdout/stderr failed.
    Io(std::io::Error),

    /// JSON or CSV output could not be produced.
    Output(String),

    /// Configuration could not be loaded or failed validation.
    Config(String),
}

impl CliError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Library(LibError::Validation { .. }) => EXIT_INVALID_INPUT,
            Self::Library(LibError::Io(_)) | Self::Io(_) | Self::Output(_) => EXIT_IO,
            Self::Library(LibError::Database(_)) => EXIT_STORAGE,
            Self::Library(LibError::Configuration(_) | LibError::InvalidPath { .. })
            | Self::Config(_) => EXIT_CONFIG,
            Self::Library(_) => EXIT_REJECTED,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library(e) => e.fmt(f),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Output(msg) => write!(f, "cannot write output: {msg}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Output(_) | Self::Config(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        Self::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
