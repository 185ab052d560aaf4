//! Request payloads.
//!
//! Payloads are assembled as [`Document`]s: ordered field maps that
//! serialize deterministically to JSON. Typed payloads such as
//! [`InvoiceData`] wrap a document and expose it through the [`Data`]
//! trait.
//!
//! Business fields are not validated; whatever has been set is sent.
//! Floating point fields set through the typed constructors must be finite.

mod document;
mod invoice;

pub use document::Document;
pub use invoice::{InvoiceData, InvoiceRowData, DEFAULT_QUANTITY};

use serde_json::{Map, Value};

use crate::error::DataError;

/// A payload backed by a [`Document`].
///
/// Implementors provide access to their document; `set`, `get_data` and
/// `to_json` come for free.
pub trait Data {
    /// Returns the backing document.
    fn document(&self) -> &Document;

    /// Returns the backing document for modification.
    fn document_mut(&mut self) -> &mut Document;

    /// Inserts or overwrites a field.
    fn set(&mut self, key: impl Into<String>, value: impl Into<Value>)
    where
        Self: Sized,
    {
        self.document_mut().set(key, value);
    }

    /// Inserts or overwrites a floating point field.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NonFiniteNumber`] if `value` is NaN or infinite.
    fn set_number(&mut self, key: impl Into<String>, value: f64) -> Result<(), DataError>
    where
        Self: Sized,
    {
        self.document_mut().set_number(key, value)?;
        Ok(())
    }

    /// Returns the full field map.
    fn get_data(&self) -> &Map<String, Value> {
        self.document().get_data()
    }

    /// Serializes the payload to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        self.document().to_json()
    }
}
