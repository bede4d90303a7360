//! Error types for the sheets crate.

use thiserror::Error;

/// Result type alias for Sheets API operations.
pub type Result<T> = std::result::Result<T, SheetsError>;

/// Errors that can occur while talking to the Sheets API.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API error response from the Sheets service
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Spreadsheet or range does not exist
    #[error("Spreadsheet or range not found: {0}")]
    NotFound(String),

    /// Authentication error (missing or invalid token)
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl SheetsError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }
}

impl From<SheetsError> for finmirror_core::Error {
    fn from(err: SheetsError) -> Self {
        match err {
            SheetsError::NotFound(target) => finmirror_core::Error::ExportTargetMissing(target),
            other => finmirror_core::Error::Transport(other.to_string()),
        }
    }
}
