//! Sales invoice operations.

use crate::clients::{ApiRequest, RequestSpec, RequestType};
use crate::data::{Data, InvoiceData};
use crate::error::DataError;

/// `POST sales/invoices`: creates a sales invoice.
///
/// The invoice is serialized to JSON when the request is built; later
/// changes to the [`InvoiceData`] do not affect it.
///
/// # Example
///
/// ```rust
/// use profit365_api::clients::{ApiRequest, RequestType};
/// use profit365_api::data::{InvoiceData, InvoiceRowData};
/// use profit365_api::requests::SaleInvoiceCreateRequest;
///
/// let invoice = InvoiceData::new(
///     "2024-01-01T00:00:00Z",
///     vec![InvoiceRowData::new("Widget", 9.99, 2).unwrap()],
/// );
/// let request = SaleInvoiceCreateRequest::new(&invoice).unwrap();
///
/// assert_eq!(request.context(), "sales/invoices");
/// assert_eq!(request.request_type(), RequestType::PostJson);
/// assert!(request.header_array().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaleInvoiceCreateRequest {
    spec: RequestSpec,
}

impl SaleInvoiceCreateRequest {
    /// Path of the sales invoice collection.
    pub const CONTEXT: &'static str = "sales/invoices";

    /// Builds the request from `invoice`.
    ///
    /// The invoice fields are not validated.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Serialization`] if the invoice cannot be
    /// serialized.
    pub fn new(invoice: &InvoiceData) -> Result<Self, DataError> {
        let content = invoice.to_json()?;
        Ok(Self {
            spec: RequestSpec::new(RequestType::PostJson).with_content(content),
        })
    }
}

impl ApiRequest for SaleInvoiceCreateRequest {
    fn spec(&self) -> &RequestSpec {
        &self.spec
    }

    fn context(&self) -> &str {
        Self::CONTEXT
    }
}
