//! A reference host form

use formaldehyde_forms::{
    FieldMap, FieldsetSpec, FormData, FormField, FormHook, FormHost, FormMeta, Result,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

const REQUIRED_MESSAGE: &str = "This field is required.";

/// A text field with the usual validation knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct CharField {
    name: String,
    label: String,
    required: bool,
    max_length: Option<usize>,
    readonly: bool,
}

impl CharField {
    /// A required field labelled after its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.replace('_', " "),
            name,
            required: true,
            max_length: None,
            readonly: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a raw submitted value. Strings are taken verbatim.
    pub fn clean(&self, raw: Option<&Value>) -> std::result::Result<Value, String> {
        let text = match raw {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        if text.is_empty() {
            return if self.required {
                Err(REQUIRED_MESSAGE.to_string())
            } else {
                Ok(Value::String(text))
            };
        }
        if let Some(max) = self.max_length {
            let length = text.chars().count();
            if length > max {
                return Err(format!(
                    "Ensure this value has at most {max} characters (it has {length})."
                ));
            }
        }
        Ok(Value::String(text))
    }
}

impl FormField for CharField {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_readonly(&self) -> bool {
        self.readonly
    }

    fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }
}

/// A minimal form: fields, bound data, metadata and lifecycle hooks.
pub struct SimpleForm {
    name: String,
    fields: FieldMap<CharField>,
    data: Option<FormData>,
    meta: Option<FormMeta>,
    hooks: Vec<Box<dyn FormHook<SimpleForm>>>,
    cleaned_data: IndexMap<String, Value>,
    errors: IndexMap<String, Vec<String>>,
    cleaned: bool,
}

impl SimpleForm {
    pub fn builder(name: impl Into<String>) -> SimpleFormBuilder {
        SimpleFormBuilder {
            name: name.into(),
            fields: FieldMap::new(),
            data: None,
            meta: None,
            hooks: Vec::new(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    pub fn field(&self, name: &str) -> Option<&CharField> {
        self.fields.get(name)
    }

    /// Run `before_clean` hooks, then validate every field.
    pub fn full_clean(&mut self) -> Result<()> {
        self.cleaned_data.clear();
        self.errors.clear();
        self.cleaned = true;
        if !self.is_bound() {
            return Ok(());
        }

        let hooks = std::mem::take(&mut self.hooks);
        let outcome = hooks.iter().try_for_each(|hook| {
            debug!(form = %self.name, hook = hook.name(), "running before_clean hook");
            hook.before_clean(self)
        });
        self.hooks = hooks;
        outcome?;

        let data = self.data.as_ref();
        for (name, field) in &self.fields {
            match field.clean(data.and_then(|d| d.get(name))) {
                Ok(value) => {
                    self.cleaned_data.insert(name.clone(), value);
                }
                Err(message) => self.errors.entry(name.clone()).or_default().push(message),
            }
        }
        debug!(
            form = %self.name,
            errors = self.errors.len(),
            "form cleaned"
        );
        Ok(())
    }

    /// Bound and free of errors; cleans on first call.
    pub fn is_valid(&mut self) -> Result<bool> {
        if !self.cleaned {
            self.full_clean()?;
        }
        Ok(self.is_bound() && self.errors.is_empty())
    }

    pub fn cleaned_data(&self) -> &IndexMap<String, Value> {
        &self.cleaned_data
    }

    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }
}

impl FormHost for SimpleForm {
    type Field = CharField;

    fn form_name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &FieldMap<CharField> {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FieldMap<CharField> {
        &mut self.fields
    }

    fn data(&self) -> Option<&FormData> {
        self.data.as_ref()
    }

    fn set_data(&mut self, data: FormData) {
        self.data = Some(data);
    }

    fn meta(&self) -> Option<&FormMeta> {
        self.meta.as_ref()
    }
}

/// Builder for [`SimpleForm`]; `build` runs every `on_init` hook.
pub struct SimpleFormBuilder {
    name: String,
    fields: FieldMap<CharField>,
    data: Option<FormData>,
    meta: Option<FormMeta>,
    hooks: Vec<Box<dyn FormHook<SimpleForm>>>,
}

impl SimpleFormBuilder {
    pub fn field(mut self, field: CharField) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn fieldsets(mut self, spec: FieldsetSpec) -> Self {
        self.meta = Some(FormMeta::with_fieldsets(spec));
        self
    }

    pub fn hook(mut self, hook: impl FormHook<SimpleForm> + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn data(mut self, data: FormData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> Result<SimpleForm> {
        let form = SimpleForm {
            name: self.name,
            fields: self.fields,
            data: self.data,
            meta: self.meta,
            hooks: self.hooks,
            cleaned_data: IndexMap::new(),
            errors: IndexMap::new(),
            cleaned: false,
        };
        for hook in &form.hooks {
            debug!(form = %form.name, hook = hook.name(), "running on_init hook");
            hook.on_init(&form)?;
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formaldehyde_forms::FormError;
    use serde_json::json;

    struct Reject;

    impl FormHook<SimpleForm> for Reject {
        fn name(&self) -> &'static str {
            "reject"
        }

        fn before_clean(&self, _form: &mut SimpleForm) -> Result<()> {
            Err(FormError::hook("reject", "payload refused"))
        }
    }

    #[test]
    fn test_char_field_clean() {
        let field = CharField::new("code").max_length(3);
        assert_eq!(field.clean(Some(&json!("abc"))), Ok(json!("abc")));
        assert_eq!(field.clean(None), Err(REQUIRED_MESSAGE.to_string()));
        assert!(field.clean(Some(&json!("abcd"))).unwrap_err().contains("at most 3"));
        assert_eq!(field.clean(Some(&json!(12))), Ok(json!("12")));
        assert_eq!(CharField::new("note").optional().clean(None), Ok(json!("")));
    }

    #[test]
    fn test_whitespace_is_not_stripped_by_host() {
        let mut form = SimpleForm::builder("Plain")
            .field(CharField::new("name"))
            .data(FormData::flat([("name", "  x ")]))
            .build()
            .unwrap();
        assert!(form.is_valid().unwrap());
        assert_eq!(form.cleaned_data()["name"], json!("  x "));
    }

    #[test]
    fn test_unbound_form_is_not_valid() {
        let mut form = SimpleForm::builder("Unbound")
            .field(CharField::new("name"))
            .build()
            .unwrap();
        assert!(!form.is_valid().unwrap());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_failing_hook_keeps_hooks_registered() {
        let mut form = SimpleForm::builder("Guarded")
            .field(CharField::new("name"))
            .hook(Reject)
            .data(FormData::flat([("name", "x")]))
            .build()
            .unwrap();
        let err = form.full_clean().unwrap_err();
        assert!(err.to_string().contains("payload refused"));
        assert!(form.full_clean().is_err());
    }

    #[test]
    fn test_label_defaults_to_name() {
        let field = CharField::new("first_name");
        assert_eq!(field.label_text(), "first name");
        assert!(field.is_required());
        assert_eq!(field.clone().label("First name").label_text(), "First name");
    }
}
