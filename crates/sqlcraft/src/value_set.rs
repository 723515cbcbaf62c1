//! Rows of column values for INSERT and UPDATE.

use crate::error::{QueryError, QueryResult};
use serde::Serialize;
use serde_json::Value;

/// An ordered `column -> value` mapping.
///
/// Only scalars (string, number, bool) and `null` are accepted. Assigning an
/// existing key again replaces the value but keeps the key's position.
///
/// # Example
/// ```
/// use sqlcraft::ValueSet;
///
/// let mut row = ValueSet::new();
/// row.add_value("username", "amy")?.add_value("age", 31)?;
/// assert_eq!(row.keys().collect::<Vec<_>>(), ["username", "age"]);
///
/// assert!(row.add_value("tags", vec!["a", "b"]).is_err());
/// # Ok::<(), sqlcraft::QueryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSet {
    values: Vec<(String, Value)>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a value set from `(key, value)` pairs, validating each value.
    pub fn from_pairs<I, K, V>(pairs: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.add_value(key, value)?;
        }
        Ok(set)
    }

    /// Build a value set from a serializable struct or map.
    ///
    /// Field order is preserved. Nested arrays or objects are rejected like any
    /// other non-scalar value.
    pub fn from_serialize<T>(data: &T) -> QueryResult<Self>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(data)? {
            Value::Object(map) => Self::from_pairs(map),
            other => Err(QueryError::serialization(format!(
                "expected a struct or map, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Set `key` to `value`.
    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<Value>) -> QueryResult<&mut Self> {
        let value = value.into();
        if matches!(value, Value::Array(_) | Value::Object(_)) {
            return Err(QueryError::InvalidValueType {
                type_name: type_name(&value),
            });
        }

        let key = key.into();
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((key, value)),
        }
        Ok(self)
    }

    /// Entries in insertion order.
    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `true` when both sets have the same keys in the same order.
    pub fn same_keys(&self, other: &ValueSet) -> bool {
        self.keys().eq(other.keys())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn creation() {
        let set = ValueSet::from_pairs([("username", "amy")]).unwrap();
        assert_eq!(set.values(), [("username".to_string(), json!("amy"))]);
        assert_eq!(set.keys().collect::<Vec<_>>(), ["username"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn null_is_accepted() {
        let mut set = ValueSet::new();
        set.add_value("deleted_at", Value::Null).unwrap();
        assert_eq!(set.get("deleted_at"), Some(&Value::Null));
    }

    #[test]
    fn non_scalars_are_rejected() {
        let mut set = ValueSet::new();

        let err = set.add_value("username", json!([])).unwrap_err();
        assert_eq!(err.to_string(), "Value is of invalid type: array");

        let err = set.add_value("username", json!({})).unwrap_err();
        assert_eq!(err, QueryError::InvalidValueType { type_name: "object" });

        assert!(set.is_empty());
    }

    #[test]
    fn reassigning_keeps_position() {
        let mut set = ValueSet::new();
        set.add_value("a", 1)
            .unwrap()
            .add_value("b", 2)
            .unwrap()
            .add_value("a", 3)
            .unwrap();
        assert_eq!(set.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(set.get("a"), Some(&json!(3)));
    }

    #[test]
    fn same_keys_is_order_sensitive() {
        let ab = ValueSet::from_pairs([("a", 1), ("b", 2)]).unwrap();
        let ba = ValueSet::from_pairs([("b", 2), ("a", 1)]).unwrap();
        assert!(ab.same_keys(&ab.clone()));
        assert!(!ab.same_keys(&ba));
    }

    #[test]
    fn from_serialize_keeps_field_order() {
        #[derive(Serialize)]
        struct NewUser {
            username: &'static str,
            email: Option<&'static str>,
            active: bool,
        }

        let set = ValueSet::from_serialize(&NewUser {
            username: "amy",
            email: None,
            active: true,
        })
        .unwrap();
        assert_eq!(set.keys().collect::<Vec<_>>(), ["username", "email", "active"]);
        assert_eq!(set.get("email"), Some(&Value::Null));
    }

    #[test]
    fn from_serialize_rejects_nested_and_non_objects() {
        let err = ValueSet::from_serialize(&json!({ "tags": ["a"] })).unwrap_err();
        assert_eq!(err, QueryError::InvalidValueType { type_name: "array" });

        let err = ValueSet::from_serialize(&42).unwrap_err();
        assert!(matches!(err, QueryError::Serialization(_)));
    }
}
