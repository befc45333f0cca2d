//! Error types for find-sdk
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for find-sdk
#[derive(Error, Debug)]
pub enum FindSdkError {
    /// No installed SDK is at or above the requested minimum
    #[error("No {min_version}+ SDK found")]
    NoSdkFound { min_version: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for find-sdk operations
pub type Result<T> = std::result::Result<T, FindSdkError>;

impl FindSdkError {
    /// Build a `NoSdkFound` error for the given minimum version
    pub fn no_sdk_found(min_version: impl Into<String>) -> Self {
        FindSdkError::NoSdkFound {
            min_version: min_version.into(),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FindSdkError::NoSdkFound { .. } => {
                format!("{}. Install a newer Xcode or SDK package.", self)
            }
            FindSdkError::Io(e) => format!("File operation failed: {}", e),
            FindSdkError::Config(msg) => format!("Configuration error: {}", msg),
            _ => self.to_string(),
        }
    }
}
