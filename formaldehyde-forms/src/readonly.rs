//! Bulk readonly toggling
//!
//! Only the per-field flag is written. Whether a readonly field is still
//! validated or bound is left to the host and its widgets.

use tracing::debug;

use crate::error::{FormError, Result};
use crate::host::{FormField, FormHost};

/// Readonly controls for any [`FormHost`].
pub trait ReadonlyForm: FormHost {
    /// Set the readonly flag on every field.
    fn set_readonly(&mut self, readonly: bool) {
        let fields = self.fields_mut();
        for field in fields.values_mut() {
            field.set_readonly(readonly);
        }
        debug!(readonly, fields = fields.len(), "toggled readonly on all fields");
    }

    /// Set the readonly flag on a single field.
    fn set_field_readonly(&mut self, name: &str, readonly: bool) -> Result<()> {
        let field = self
            .fields_mut()
            .get_mut(name)
            .ok_or_else(|| FormError::FieldNotFound {
                name: name.to_string(),
            })?;
        field.set_readonly(readonly);
        Ok(())
    }

    /// Names of the fields currently marked readonly, in form order.
    fn readonly_fields(&self) -> Vec<&str> {
        self.fields()
            .iter()
            .filter(|(_, field)| field.is_readonly())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl<F: FormHost + ?Sized> ReadonlyForm for F {}
