//! Whitespace stripping before validation
//!
//! Every string value in the bound data is replaced by its trimmed form.
//! The data is copied first; the payload the host was constructed with is
//! never touched.

use serde_json::Value;
use tracing::debug;

use crate::data::FormData;
use crate::error::Result;
use crate::host::{FormHook, FormHost};

/// A copy of `data` with every string value trimmed.
///
/// Multi-valued keys have each value trimmed independently. Non-string
/// values are copied as they are.
pub fn strip_whitespace(data: &FormData) -> FormData {
    match data {
        FormData::Flat(map) => FormData::Flat(
            map.iter()
                .map(|(key, value)| (key.clone(), strip_value(value)))
                .collect(),
        ),
        FormData::Multi(map) => {
            let mut stripped = map.clone();
            for (key, values) in map.lists() {
                stripped.set_list(key, values.iter().map(strip_value).collect());
            }
            FormData::Multi(stripped)
        }
    }
}

fn strip_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other.clone(),
    }
}

/// Whitespace stripping for any [`FormHost`].
pub trait StripWhitespace: FormHost {
    /// Replace the bound data with a stripped copy. Unbound or empty forms
    /// are left alone.
    fn strip_whitespace_from_data(&mut self) {
        let Some(data) = self.data().filter(|data| !data.is_empty()) else {
            return;
        };
        let stripped = strip_whitespace(data);
        debug!(
            form = self.form_name(),
            keys = stripped.len(),
            multi = stripped.is_multi(),
            "stripped whitespace from submitted data"
        );
        self.set_data(stripped);
    }
}

impl<F: FormHost + ?Sized> StripWhitespace for F {}

/// Strips whitespace right before the host validates.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripWhitespaceHook;

impl<F: FormHost + ?Sized> FormHook<F> for StripWhitespaceHook {
    fn name(&self) -> &'static str {
        "strip_whitespace"
    }

    fn before_clean(&self, form: &mut F) -> Result<()> {
        form.strip_whitespace_from_data();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MultiValueMap;
    use crate::host::testing::TestForm;
    use serde_json::json;

    #[test]
    fn test_flat_values_are_trimmed() {
        let data = FormData::flat([("first_name", " Foo    "), ("last_name", "   Bar ack")]);
        let stripped = strip_whitespace(&data);
        assert_eq!(stripped.get_str("first_name"), Some("Foo"));
        assert_eq!(stripped.get_str("last_name"), Some("Bar ack"));
    }

    #[test]
    fn test_all_whitespace_becomes_empty() {
        let stripped = strip_whitespace(&FormData::flat([("name", " \t\n ")]));
        assert_eq!(stripped.get_str("name"), Some(""));
    }

    #[test]
    fn test_multi_values_trimmed_independently() {
        let data = FormData::from_pairs([
            ("tag", json!(" rust ")),
            ("tag", json!(7)),
            ("tag", json!("\u{3000}forms\u{a0}")),
        ]);
        let FormData::Multi(map) = strip_whitespace(&data) else {
            panic!("shape must be preserved");
        };
        assert_eq!(
            map.get_list("tag"),
            Some(&[json!("rust"), json!(7), json!("forms")][..])
        );
    }

    #[test]
    fn test_non_strings_pass_through() {
        let upload = json!({"filename": " a.txt ", "size": 10});
        let data = FormData::flat([
            ("count", json!(3)),
            ("agree", json!(true)),
            ("upload", upload.clone()),
            ("missing", Value::Null),
        ]);
        let stripped = strip_whitespace(&data);
        assert_eq!(stripped.get("count"), Some(&json!(3)));
        assert_eq!(stripped.get("agree"), Some(&json!(true)));
        assert_eq!(stripped.get("upload"), Some(&upload));
        assert_eq!(stripped.get("missing"), Some(&Value::Null));
    }

    #[test]
    fn test_original_payload_untouched() {
        let original: MultiValueMap = [("name", " padded ")].into_iter().collect();
        let payload = FormData::Multi(original.clone());
        let mut form = TestForm::with_fields(&["name"]).bound(payload.clone());

        form.strip_whitespace_from_data();

        assert_eq!(payload, FormData::Multi(original));
        assert_eq!(form.data.as_ref().and_then(|d| d.get_str("name")), Some("padded"));
    }

    #[test]
    fn test_unbound_and_empty_forms_are_noops() {
        let mut unbound = TestForm::with_fields(&["name"]);
        unbound.strip_whitespace_from_data();
        assert!(unbound.data.is_none());

        let mut empty = TestForm::with_fields(&["name"]).bound(FormData::Multi(MultiValueMap::new()));
        StripWhitespaceHook.before_clean(&mut empty).unwrap();
        assert_eq!(empty.data, Some(FormData::Multi(MultiValueMap::new())));
    }
}
