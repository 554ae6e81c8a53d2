//! Error types for the form decorators

use formaldehyde_config::ConfigError;
use thiserror::Error;

/// Result type for form decorator operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors raised while binding decorators to a host form
#[derive(Debug, Error)]
pub enum FormError {
    /// The form uses fieldsets but its metadata declares none
    #[error("form '{form}' has no fieldsets declared in its metadata")]
    MissingFieldsets { form: String },

    /// A fieldset or lookup names a field the form does not have
    #[error("field not found: {name}")]
    FieldNotFound { name: String },

    /// The fieldset declaration itself is malformed
    #[error("invalid fieldset spec: {message}")]
    InvalidSpec { message: String },

    /// A lifecycle hook refused to proceed
    #[error("hook '{hook}' failed: {message}")]
    Hook { hook: String, message: String },

    /// Layout settings could not be used
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FormError {
    /// Failure raised by a host or application hook.
    pub fn hook(hook: impl Into<String>, message: impl Into<String>) -> Self {
        FormError::Hook {
            hook: hook.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_spec(message: impl Into<String>) -> Self {
        FormError::InvalidSpec {
            message: message.into(),
        }
    }
}
