//! What a host form library must provide
//!
//! The decorators in this crate never own a form. They work against these
//! traits, which a host implements once for its form and field types:
//!
//! - [`FormField`]: one declared field, with a readonly flag
//! - [`FormHost`]: the field mapping, the bound data, and the form metadata
//! - [`FormHook`]: lifecycle callbacks the host runs at construction and
//!   before validation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::FormData;
use crate::error::Result;
use crate::spec::FieldsetSpec;

/// Fields of a form by name, in declaration order.
pub type FieldMap<F> = IndexMap<String, F>;

/// A single field declared on a host form.
pub trait FormField {
    fn name(&self) -> &str;

    fn is_readonly(&self) -> bool;

    /// Mark the field readonly. Enforcement is up to the host's widgets.
    fn set_readonly(&mut self, readonly: bool);
}

/// Declarative metadata attached to a form type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fieldsets: Option<FieldsetSpec>,
}

impl FormMeta {
    pub fn with_fieldsets(fieldsets: FieldsetSpec) -> Self {
        Self {
            fieldsets: Some(fieldsets),
        }
    }
}

/// A form as seen by the decorators.
pub trait FormHost {
    type Field: FormField;

    /// Name used in errors and logs.
    fn form_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn fields(&self) -> &FieldMap<Self::Field>;

    fn fields_mut(&mut self) -> &mut FieldMap<Self::Field>;

    /// The submitted data, if the form is bound.
    fn data(&self) -> Option<&FormData>;

    fn set_data(&mut self, data: FormData);

    /// Metadata for this form, if it declares any.
    fn meta(&self) -> Option<&FormMeta> {
        None
    }
}

/// A callback run by the host at fixed points of a form's lifecycle.
///
/// Hosts call [`FormHook::on_init`] once the form is constructed and
/// [`FormHook::before_clean`] right before validation reads the data.
pub trait FormHook<F: ?Sized> {
    fn name(&self) -> &'static str;

    fn on_init(&self, _form: &F) -> Result<()> {
        Ok(())
    }

    fn before_clean(&self, _form: &mut F) -> Result<()> {
        Ok(())
    }
}
