//! Submitted form data
//!
//! Hosts hand over request payloads in one of two shapes: a flat map with one
//! value per key, or a multi-valued map where a key may repeat (checkbox
//! groups, multi-selects, repeated query parameters). Values are JSON values
//! so uploads and typed payloads can sit next to plain strings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A key → list-of-values map preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiValueMap(IndexMap<String, Vec<Value>>);

impl MultiValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value submitted for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).and_then(|values| values.last())
    }

    /// Every value submitted for `key`, in submission order.
    pub fn get_list(&self, key: &str) -> Option<&[Value]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Replace all values for `key`.
    pub fn set_list(&mut self, key: impl Into<String>, values: Vec<Value>) {
        self.0.insert(key.into(), values);
    }

    /// Add one more value for `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Iterate `(key, values)` pairs in insertion order.
    pub fn lists(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MultiValueMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MultiValueMap::new();
        for (key, value) in iter {
            map.append(key, value);
        }
        map
    }
}

/// Data bound to a form, as submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum FormData {
    /// One value per key.
    Flat(IndexMap<String, Value>),
    /// Keys may carry several values.
    Multi(MultiValueMap),
}

impl FormData {
    /// Build a single-valued payload.
    pub fn flat<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        FormData::Flat(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a multi-valued payload the way an urlencoded body decodes:
    /// repeated keys accumulate.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        FormData::Multi(pairs.into_iter().collect())
    }

    /// Single-valued access; multi-valued data yields the last value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            FormData::Flat(map) => map.get(key),
            FormData::Multi(map) => map.get(key),
        }
    }

    /// Single-valued access for string values only.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, FormData::Multi(_))
    }

    pub fn len(&self) -> usize {
        match self {
            FormData::Flat(map) => map.len(),
            FormData::Multi(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
