use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::id::FieldId;

/// Submitted answers, keyed by field id string.
///
/// Keys are kept as strings so data from hosts that never parsed the ids
/// still round-trips untouched; insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(flatten)]
    values: IndexMap<String, serde_json::Value>,
}

impl FormValues {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Get the value answering a field.
    #[must_use]
    pub fn for_field(&self, id: FieldId) -> Option<&serde_json::Value> {
        self.values.get(id.to_string().as_str())
    }

    /// Set a value for a key, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.values.insert(key.into(), value);
    }

    /// Set the answer for a field.
    pub fn set_field(&mut self, id: FieldId, value: serde_json::Value) {
        self.set(id.to_string(), value);
    }

    /// Builder-style [`set_field`](Self::set_field).
    #[must_use]
    pub fn with_field(mut self, id: FieldId, value: serde_json::Value) -> Self {
        self.set_field(id, value);
        self
    }

    /// Remove a value by key, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.shift_remove(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

}

impl FromIterator<(String, serde_json::Value)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_is_empty() {
        let vals = FormValues::new();
        assert!(vals.is_empty());
        assert_eq!(vals.len(), 0);
    }

    #[test]
    fn field_accessors_use_id_strings() {
        let id = FieldId::v4();
        let vals = FormValues::new().with_field(id, json!("30"));
        assert_eq!(vals.for_field(id), Some(&json!("30")));
        assert_eq!(vals.get(&id.to_string()), Some(&json!("30")));
        assert!(vals.for_field(FieldId::v4()).is_none());
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut vals: FormValues = [
            ("a".to_owned(), json!(1)),
            ("b".to_owned(), json!(2)),
            ("c".to_owned(), json!(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(vals.remove("b"), Some(json!(2)));
        assert!(vals.remove("b").is_none());
        assert_eq!(vals.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut vals = FormValues::new();
        vals.set("x", json!("y"));
        assert_eq!(serde_json::to_value(&vals).unwrap(), json!({ "x": "y" }));
        let back: FormValues = serde_json::from_value(json!({ "x": "y" })).unwrap();
        assert_eq!(back, vals);
    }
}
