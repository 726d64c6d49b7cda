//! Error types for the booking desk.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Sheet or record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The sheet has no column with this name
    #[error("Sheet '{sheet}' has no column '{column}'")]
    MissingColumn { sheet: String, column: String },

    /// Generic store error with context
    #[error("Store error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
///
/// Bad input is never one of these: validators reject it and the step
/// re-prompts.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Console read or write failed, including end of input
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Store failure that was not recovered
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The user chose to exit after a store failure
    #[error("Session aborted by user")]
    Aborted,
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound("bookings".to_string());
        assert_eq!(err.to_string(), "Not found: bookings");

        let err = ConfigError::MissingVar("BOOKING_SHEET_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: BOOKING_SHEET_URL"
        );

        let err = StoreError::MissingColumn {
            sheet: "customers".to_string(),
            column: "PHONE".to_string(),
        };
        assert_eq!(err.to_string(), "Sheet 'customers' has no column 'PHONE'");

        let err = SessionError::Aborted;
        assert_eq!(err.to_string(), "Session aborted by user");
    }

    #[test]
    fn test_store_error_passes_through_session_error() {
        let err: SessionError = StoreError::ApiError {
            status: 503,
            message: "Backend unavailable".to_string(),
        }
        .into();
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Backend unavailable"));
    }
}
