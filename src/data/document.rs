//! The generic payload document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::DataError;

/// An insertion-ordered mapping from field name to JSON value.
///
/// Values may be strings, numbers, nested documents or sequences of
/// documents; anything convertible into a [`serde_json::Value`] is accepted.
/// A non-finite `f64` passed to [`set`](Self::set) becomes `null`; use
/// [`set_number`](Self::set_number) where that must be rejected.
/// Setting an existing key overwrites its value in place, so the field
/// keeps the position of its first insertion.
///
/// # Example
///
/// ```rust
/// use profit365_api::data::Document;
///
/// let mut row = Document::new();
/// row.set("name", "Widget");
/// row.set("price", 9.99);
/// row.set("quantity", 1);
/// row.set("quantity", 2);
///
/// assert_eq!(row.to_json().unwrap(), r#"{"name":"Widget","price":9.99,"quantity":2}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Inserts or overwrites `key`. Last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts or overwrites `key` with a floating point number.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NonFiniteNumber`] if `value` is NaN or infinite.
    /// The document is left unchanged.
    pub fn set_number(
        &mut self,
        key: impl Into<String>,
        value: f64,
    ) -> Result<&mut Self, DataError> {
        let key = key.into();
        let Some(number) = Number::from_f64(value) else {
            return Err(DataError::NonFiniteNumber { key });
        };
        Ok(self.set(key, number))
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the full mapping, ready to be serialized.
    #[must_use]
    pub const fn get_data(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the document to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Self::Object(document.0)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut document = Document::new();
        document.set("date", "2024-01-01T00:00:00Z");
        document.set("date", "2024-02-01T00:00:00Z");

        assert_eq!(document.len(), 1);
        assert_eq!(document.get("date"), Some(&json!("2024-02-01T00:00:00Z")));
        assert_eq!(
            document.get_data().get("date"),
            Some(&json!("2024-02-01T00:00:00Z"))
        );
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut document = Document::new();
        document.set("zeta", 1).set("alpha", 2).set("mid", 3);
        document.set("zeta", 4);

        let keys: Vec<&str> = document.get_data().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(document.to_json().unwrap(), r#"{"zeta":4,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_set_number_rejects_non_finite_values() {
        let mut document = Document::new();
        document.set_number("price", 9.99).unwrap();

        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = document.set_number("price", value);
            assert!(matches!(
                result,
                Err(DataError::NonFiniteNumber { ref key }) if key == "price"
            ));
        }
        assert_eq!(document.get("price"), Some(&json!(9.99)));
    }

    #[test]
    fn test_nested_documents_and_sequences() {
        let mut row = Document::new();
        row.set("name", "Widget");

        let mut invoice = Document::new();
        invoice.set("customer", row.clone());
        invoice.set("rows", vec![Value::from(row)]);

        assert_eq!(
            Value::from(invoice),
            json!({"customer": {"name": "Widget"}, "rows": [{"name": "Widget"}]})
        );
    }

    #[test]
    fn test_new_document_is_empty() {
        let document = Document::default();
        assert!(document.is_empty());
        assert_eq!(document.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_document_round_trips_through_serde() {
        let mut document = Document::new();
        document.set("price", 9.99).set("quantity", 2);

        let json = serde_json::to_string(&document).unwrap();
        let restored: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, document);
    }
}
