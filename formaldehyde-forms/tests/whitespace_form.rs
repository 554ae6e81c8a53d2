//! Whitespace stripping through the validation lifecycle.

use formaldehyde_forms::{FormData, FormHost, StripWhitespace, StripWhitespaceHook};
use formaldehyde_test_utils::{CharField, SimpleForm};
use rstest::rstest;
use serde_json::json;

fn whitespace_form(data: FormData) -> SimpleForm {
    SimpleForm::builder("WhitespaceForm")
        .field(CharField::new("first_name").label("First name").max_length(100))
        .field(CharField::new("last_name").label("Last name").max_length(100))
        .hook(StripWhitespaceHook)
        .data(data)
        .build()
        .unwrap()
}

#[rstest]
#[case::flat(FormData::flat([("first_name", " Foo    "), ("last_name", "   Bar ack")]))]
#[case::request(FormData::from_pairs([("first_name", " Foo    "), ("last_name", "   Bar ack")]))]
fn test_whitespace_form(#[case] data: FormData) {
    let mut form = whitespace_form(data);
    assert!(form.is_valid().unwrap());
    assert_eq!(form.cleaned_data()["first_name"], json!("Foo"));
    assert_eq!(form.cleaned_data()["last_name"], json!("Bar ack"));
}

#[rstest]
#[case::flat(FormData::flat([("first_name", " John    "), ("last_name", "   ")]))]
#[case::request(FormData::from_pairs([("first_name", " John    "), ("last_name", "   ")]))]
fn test_all_whitespace_required_field_fails(#[case] data: FormData) {
    let mut form = whitespace_form(data);
    assert!(!form.is_valid().unwrap());
    assert_eq!(form.errors().keys().collect::<Vec<_>>(), ["last_name"]);
    assert_eq!(form.cleaned_data()["first_name"], json!("John"));
}

#[test]
fn test_length_is_checked_after_stripping() {
    let padded = format!("   {}   ", "x".repeat(100));
    let mut form = whitespace_form(FormData::flat([
        ("first_name", padded.as_str()),
        ("last_name", "y"),
    ]));
    assert!(form.is_valid().unwrap());
}

#[test]
fn test_caller_payload_is_not_mutated() {
    let payload = FormData::from_pairs([
        ("first_name", json!(" Ada ")),
        ("first_name", json!(" Augusta ")),
        ("last_name", json!(" Lovelace")),
    ]);
    let mut form = whitespace_form(payload.clone());
    form.strip_whitespace_from_data();

    let FormData::Multi(stripped) = form.data().unwrap() else {
        panic!("multi-valued data must stay multi-valued");
    };
    assert_eq!(
        stripped.get_list("first_name"),
        Some(&[json!("Ada"), json!("Augusta")][..])
    );
    assert_eq!(payload.get_str("last_name"), Some(" Lovelace"));
}
