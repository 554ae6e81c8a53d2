//! Error types for the formaldehyde settings system

use thiserror::Error;

/// Settings-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings parsing or extraction failed
    #[error("Failed to parse layout settings: {source}")]
    ParseError { source: Box<figment::Error> },

    /// Settings validation failed
    #[error("Layout settings validation failed: {message}")]
    ValidationError { message: String },

    /// Home directory could not be determined
    #[error("Unable to determine home directory")]
    HomeDirectoryNotFound,

    /// Current directory could not be determined
    #[error("Unable to determine current directory")]
    CurrentDirectoryNotFound,
}

impl ConfigError {
    /// Build a validation error for a single out-of-range key
    pub fn invalid_width(key: &str, value: u32, min: u32, max: u32) -> Self {
        ConfigError::ValidationError {
            message: format!("{key} must be between {min} and {max} grid columns, got {value}"),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}
