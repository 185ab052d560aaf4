//! Request types for the Profit365 API client.
//!
//! This module provides [`RequestSpec`], the transport-independent
//! description of one API call, and the [`ApiRequest`] trait every API
//! operation implements.
//!
//! # Adding an operation
//!
//! An operation only supplies its context path and builds its
//! [`RequestSpec`]; everything else is provided by the trait:
//!
//! ```rust
//! use profit365_api::clients::{ApiRequest, RequestSpec, RequestType};
//!
//! struct ListInvoices {
//!     spec: RequestSpec,
//! }
//!
//! impl ListInvoices {
//!     fn new() -> Self {
//!         Self { spec: RequestSpec::new(RequestType::Get) }
//!     }
//! }
//!
//! impl ApiRequest for ListInvoices {
//!     fn spec(&self) -> &RequestSpec {
//!         &self.spec
//!     }
//!
//!     fn context(&self) -> &str {
//!         "sales/invoices"
//!     }
//! }
//!
//! let request = ListInvoices::new();
//! assert_eq!(request.request_type(), RequestType::Get);
//! assert!(request.content().is_none());
//! ```

/// How a request is sent and what its body contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// HTTP GET without a body.
    Get,
    /// HTTP POST with a JSON body.
    PostJson,
    /// Declared XML POST. The transport has no XML branch: such requests
    /// are sent as GET without a body.
    PostXml,
}

impl RequestType {
    /// Returns the content type attached by the transport, if any.
    #[must_use]
    pub const fn as_content_type(&self) -> Option<&'static str> {
        match self {
            Self::PostJson => Some("application/json"),
            Self::Get | Self::PostXml => None,
        }
    }
}

/// The immutable description of one API call: type, extra header lines and
/// a pre-serialized body.
///
/// # Example
///
/// ```rust
/// use profit365_api::clients::{RequestSpec, RequestType};
///
/// let spec = RequestSpec::new(RequestType::PostJson)
///     .with_headers(vec!["X-Request-Id: 42".to_string()])
///     .with_content(r#"{"date":"2024-01-01T00:00:00Z","rows":[]}"#);
///
/// assert_eq!(spec.request_type(), RequestType::PostJson);
/// assert_eq!(spec.header_array().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    request_type: RequestType,
    header_array: Option<Vec<String>>,
    content: Option<String>,
}

impl RequestSpec {
    /// Creates a spec with no extra headers and no body.
    #[must_use]
    pub const fn new(request_type: RequestType) -> Self {
        Self {
            request_type,
            header_array: None,
            content: None,
        }
    }

    /// Sets the extra `"Name: Value"` header lines.
    #[must_use]
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.header_array = Some(headers);
        self
    }

    /// Sets the serialized body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns the request type.
    #[must_use]
    pub const fn request_type(&self) -> RequestType {
        self.request_type
    }

    /// Returns the extra header lines, if any were set.
    #[must_use]
    pub fn header_array(&self) -> Option<&[String]> {
        self.header_array.as_deref()
    }

    /// Returns the body, if one was set.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// One Profit365 API operation.
///
/// Implementors provide [`spec`](Self::spec) and [`context`](Self::context);
/// the accessors used by the transport are derived from the spec.
pub trait ApiRequest {
    /// Returns the request description.
    fn spec(&self) -> &RequestSpec;

    /// Returns the path of this operation relative to the versioned base
    /// URL (e.g. `sales/invoices`). It is used verbatim, so it must
    /// already be URL-safe.
    fn context(&self) -> &str;

    /// Returns the request type.
    fn request_type(&self) -> RequestType {
        self.spec().request_type()
    }

    /// Returns the extra header lines, if any.
    fn header_array(&self) -> Option<&[String]> {
        self.spec().header_array()
    }

    /// Returns the serialized body, if any.
    fn content(&self) -> Option<&str> {
        self.spec().content()
    }
}

impl<T: ApiRequest + ?Sized> ApiRequest for &T {
    fn spec(&self) -> &RequestSpec {
        (**self).spec()
    }

    fn context(&self) -> &str {
        (**self).context()
    }
}
