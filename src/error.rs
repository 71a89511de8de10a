//! Error types and handling for the `templeguide` library

use thiserror::Error;

/// Main error type for the `templeguide` library
#[derive(Error, Debug)]
pub enum TempleGuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Dataset loading or parsing errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Favorites storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TempleGuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TempleGuideError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TempleGuideError::Dataset { .. } => {
                "Unable to load temple data. The directory will start empty.".to_string()
            }
            TempleGuideError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TempleGuideError::Storage { .. } => {
                "Favorites storage failed. Your favorites may not be saved.".to_string()
            }
            TempleGuideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TempleGuideError::General { message } => message.clone(),
        }
    }
}
