//! Error types for the advent calendar site.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serving the calendar.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Day is not unlocked yet
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Method not allowed on an existing route
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Template rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::AccessDenied(_) => 403,
            Error::NotFound(_) => 404,
            Error::MethodNotAllowed(_) => 405,
            _ => 500,
        }
    }

    /// Message that is safe to show to a visitor.
    ///
    /// Server-side failures are reported generically; the detail goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            Error::Validation(msg)
            | Error::AccessDenied(msg)
            | Error::NotFound(msg)
            | Error::MethodNotAllowed(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}
