//! Sales invoice payloads.
//!
//! Field names follow the Profit365 sales invoice resource
//! (<https://doc.profit365.eu/developers/en/api/doc/sales/invoices>).
//! Only `date` and `rows` (and `name`, `price`, `quantity` per row) are set
//! by the constructors; other documented fields can be added with
//! [`Data::set`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::data::{Data, Document};
use crate::error::DataError;

/// Quantity used by [`InvoiceRowData::single`].
pub const DEFAULT_QUANTITY: i64 = 1;

/// One line item of a sales invoice.
///
/// # Example
///
/// ```rust
/// use profit365_api::data::{Data, InvoiceRowData};
///
/// let row = InvoiceRowData::new("Widget", 9.99, 2).unwrap();
/// assert_eq!(row.get_data()["name"], "Widget");
/// assert_eq!(row.get_data()["quantity"], 2);
///
/// assert!(InvoiceRowData::new("Widget", f64::NAN, 2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceRowData {
    document: Document,
}

impl InvoiceRowData {
    /// Creates a row for `quantity` items of `name` at `price` each.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NonFiniteNumber`] if `price` is NaN or infinite.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Result<Self, DataError> {
        let name: String = name.into();
        let mut document = Document::new();
        document
            .set("name", name)
            .set_number("price", price)?
            .set("quantity", quantity);
        Ok(Self { document })
    }

    /// Creates a row for a single item.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NonFiniteNumber`] if `price` is NaN or infinite.
    pub fn single(name: impl Into<String>, price: f64) -> Result<Self, DataError> {
        Self::new(name, price, DEFAULT_QUANTITY)
    }
}

impl Data for InvoiceRowData {
    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

impl From<InvoiceRowData> for Value {
    fn from(row: InvoiceRowData) -> Self {
        row.document.into()
    }
}

/// A sales invoice: an issue date and its rows.
///
/// # Example
///
/// ```rust
/// use profit365_api::data::{Data, InvoiceData, InvoiceRowData};
///
/// let invoice = InvoiceData::new(
///     "2024-01-01T00:00:00Z",
///     vec![InvoiceRowData::new("Widget", 9.99, 2).unwrap()],
/// );
///
/// assert_eq!(
///     invoice.to_json().unwrap(),
///     r#"{"date":"2024-01-01T00:00:00Z","rows":[{"name":"Widget","price":9.99,"quantity":2}]}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceData {
    document: Document,
}

impl InvoiceData {
    /// Creates an invoice dated `date`, an ISO 8601 timestamp string.
    ///
    /// The string is passed through unchecked.
    #[must_use]
    pub fn new(date: impl Into<String>, rows: Vec<InvoiceRowData>) -> Self {
        let date: String = date.into();
        let rows: Vec<Value> = rows.into_iter().map(Value::from).collect();
        let mut document = Document::new();
        document.set("date", date).set("rows", rows);
        Self { document }
    }

    /// Creates an invoice dated at `date`, formatted as
    /// `YYYY-MM-DDTHH:MM:SSZ`.
    #[must_use]
    pub fn dated(date: DateTime<Utc>, rows: Vec<InvoiceRowData>) -> Self {
        Self::new(date.to_rfc3339_opts(SecondsFormat::Secs, true), rows)
    }
}

impl Data for InvoiceData {
    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}
