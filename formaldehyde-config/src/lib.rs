//! Layout settings for formaldehyde, loaded with Figment
//!
//! Fieldset lines that leave their column widths unspecified fall back to
//! the process-wide [`LayoutSettings`]. This crate owns those settings: the
//! built-in defaults, loading them from files and the environment, and the
//! slot every form reads from.
//!
//! # Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults ([`DEFAULT_GRID_COLUMNS`], [`DEFAULT_FIELD_COLUMN_SIZE`],
//!    [`FIRST_LABEL_COLUMN_SIZE`], [`LABEL_COLUMN_SIZE`])
//! 2. `~/.formaldehyde/formaldehyde.{toml,yaml,yml,json}`
//! 3. `./.formaldehyde/formaldehyde.{toml,yaml,yml,json}`
//! 4. `FORMALDEHYDE_*` environment variables
//!
//! ```toml
//! grid_columns = 16
//! default_field_column_size = 8
//! first_label_column_size = 2
//! label_column_size = 1
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use formaldehyde_config::{current, load_and_install, override_settings, LayoutSettings};
//!
//! // At startup: read files and environment.
//! load_and_install()?;
//!
//! // Or install settings built in code.
//! override_settings(LayoutSettings::default().with_default_field_column_size(4))?;
//!
//! assert_eq!(current().default_field_column_size, 4);
//! # Ok::<(), formaldehyde_config::ConfigError>(())
//! ```

/// Settings file discovery
pub mod discovery;
/// Error types
pub mod error;
/// The process-wide settings slot
pub mod global;
/// Figment-based loading
pub mod provider;
/// The settings type and its defaults
pub mod settings;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery, CONFIG_DIR_NAME};
pub use error::ConfigError;
pub use global::{current, load_and_install, override_settings, reset};
pub use provider::{SettingsProvider, ENV_PREFIX};
pub use settings::{
    LayoutSettings, DEFAULT_FIELD_COLUMN_SIZE, DEFAULT_GRID_COLUMNS, FIRST_LABEL_COLUMN_SIZE,
    LABEL_COLUMN_SIZE,
};

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
