//! Concrete Profit365 API operations.
//!
//! Each operation implements [`ApiRequest`](crate::clients::ApiRequest):
//! it owns a [`RequestSpec`](crate::clients::RequestSpec) and names its
//! context path. New operations are added here without touching the
//! transport.
//!
//! | Operation | Method | Context |
//! |-----------|--------|---------|
//! | [`SaleInvoiceCreateRequest`] | POST (JSON) | `sales/invoices` |

mod sale_invoice;

pub use sale_invoice::SaleInvoiceCreateRequest;
