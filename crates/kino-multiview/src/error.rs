//! Error types for Kino MultiView
//!
//! Coordinator operations never fail: invalid selections are ignored. These
//! errors cover the surrounding surface (configuration loading).

use thiserror::Error;

/// Result type alias for MultiView operations
pub type Result<T> = std::result::Result<T, Error>;

/// MultiView error types
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Returns the error code for diagnostics output
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Json(_) => "CONFIG_PARSE",
            Error::Io(_) => "IO",
        }
    }
}
