//! Decorators for host form libraries
//!
//! `formaldehyde-forms` layers three small behaviors over an existing form
//! library. It is not a forms engine: fields, validation and data binding
//! stay with the host, which exposes them through [`FormHost`].
//!
//! # Decorators
//!
//! - **Fieldsets** ([`FieldsetForm`]): group fields into styled fieldsets
//!   and lines, with column widths for templates
//! - **Readonly** ([`ReadonlyForm`]): flip the readonly flag of every field
//! - **Whitespace** ([`StripWhitespace`]): trim submitted strings before
//!   validation
//!
//! Each is an extension trait implemented for every [`FormHost`]. Hosts that
//! run lifecycle callbacks can register [`FieldsetHook`] (fails fast on forms
//! without fieldsets) and [`StripWhitespaceHook`] (strips before cleaning).
//!
//! ```ignore
//! use formaldehyde_forms::{FieldsetForm, FormField};
//!
//! for fieldset in form.fieldsets()? {
//!     println!("<fieldset class=\"{}\">", fieldset.classes());
//!     for line in fieldset {
//!         for item in line {
//!             println!("{} label={} field={}", item.field.name(), item.label, item.layout);
//!         }
//!     }
//! }
//! ```

pub mod data;
pub mod error;
pub mod fieldsets;
pub mod host;
pub mod logging;
pub mod readonly;
pub mod spec;
pub mod whitespace;

pub use data::{FormData, MultiValueMap};
pub use error::{FormError, Result};
pub use fieldsets::{Fieldset, FieldsetForm, FieldsetHook, Fieldsets, Line, LineField};
pub use host::{FieldMap, FormField, FormHook, FormHost, FormMeta};
pub use logging::Pretty;
pub use readonly::ReadonlyForm;
pub use spec::{FieldsetDecl, FieldsetOptions, FieldsetSpec, LineSpec, WidthSpec};
pub use whitespace::{strip_whitespace, StripWhitespace, StripWhitespaceHook};

pub use formaldehyde_config::LayoutSettings;
