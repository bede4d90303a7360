//! Core error types for the Finmirror export engine.
//!
//! Transport-specific errors (HTTP, JSON) are converted to these types by the
//! grid adapter so the engine can tell a missing target from a network failure.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the export engine.
///
/// Only `ConfigInvalid` and `ExecutionConflict` abort a batch. Every other
/// variant is isolated to the sheet it was raised for.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Sheets export is not available: {0}")]
    ConfigInvalid(String),

    #[error("Export target not found: {0}")]
    ExportTargetMissing(String),

    #[error("No headers found in {0}")]
    NoHeadersFound(String),

    #[error("Grid transport failed: {0}")]
    Transport(String),

    #[error("An export is already running")]
    ExecutionConflict,

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Whether the error only concerns a single sheet and the batch may continue.
    pub fn is_sheet_local(&self) -> bool {
        !matches!(self, Error::ConfigInvalid(_) | Error::ExecutionConflict)
    }
}

/// A configured sheet that cannot be synced as written.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}
