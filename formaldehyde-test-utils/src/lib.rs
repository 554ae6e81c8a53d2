//! Test utilities for formaldehyde crates
//!
//! # SimpleForm
//!
//! The decorators only work against a host form library. [`SimpleForm`] is a
//! small but complete host: char fields with `required` and `max_length`,
//! bound data, fieldset metadata, lifecycle hooks, and a `full_clean` pass
//! producing cleaned data and errors. Values are validated verbatim; it does
//! not trim anything itself, so stripping is visible only through hooks.
//!
//! ```no_run
//! use formaldehyde_forms::{FormData, StripWhitespaceHook};
//! use formaldehyde_test_utils::{CharField, SimpleForm};
//!
//! let mut form = SimpleForm::builder("ContactForm")
//!     .field(CharField::new("first_name").max_length(100))
//!     .hook(StripWhitespaceHook)
//!     .data(FormData::flat([("first_name", " John ")]))
//!     .build()?;
//! assert!(form.is_valid()?);
//! # Ok::<(), formaldehyde_forms::FormError>(())
//! ```
//!
//! # IsolatedSettingsEnvironment
//!
//! RAII guard for tests that read settings from disk or the environment:
//! HOME and the current directory point into a temporary directory, and
//! everything is restored on drop, including the process-wide settings.

mod environment;
mod form;

pub use environment::{create_temp_dir_with_retry, IsolatedSettingsEnvironment};
pub use form::{CharField, SimpleForm, SimpleFormBuilder};
