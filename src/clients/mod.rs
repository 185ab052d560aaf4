//! HTTP client types for Profit365 API communication.
//!
//! This module provides the transport layer: the request contract every
//! API operation implements, header handling, and the synchronous
//! [`Communicator`] that executes requests.
//!
//! # Overview
//!
//! - [`Communicator`]: Sends a request and returns the HTTP status code
//! - [`ApiRequest`]: The contract implemented by each API operation
//! - [`RequestSpec`]: Type, extra headers and body of one request
//! - [`RequestType`]: `Get`, `PostJson` or `PostXml`
//! - [`HeaderSet`]: Ordered `"Name: Value"` header lines
//! - [`HeaderContributor`]: Anything that can supply header lines
//! - [`HttpError`]: Errors raised while sending
//!
//! # Header Order
//!
//! Every request carries, in order: the contributor's lines (for
//! [`AuthHeader`](crate::auth::AuthHeader): `ClientID`, `ClientSecret`,
//! `Authorization`, optional `CompanyID`), the request's extra lines, and
//! `Content-Type: application/json` for JSON posts. Duplicated names are
//! all sent.
//!
//! # Status Codes
//!
//! The communicator never interprets the response: 2xx, 4xx and 5xx
//! statuses are all returned as `Ok(status)`. Retrying is left to the
//! caller.

mod communicator;
mod errors;
mod headers;
mod request;

pub use communicator::{Communicator, SDK_VERSION};
pub use errors::{HttpError, InvalidHeaderError};
pub use headers::{HeaderContributor, HeaderSet};
pub use request::{ApiRequest, RequestSpec, RequestType};
