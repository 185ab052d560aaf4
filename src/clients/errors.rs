//! HTTP-specific error types for the Profit365 API client.
//!
//! # Error Handling
//!
//! - [`InvalidHeaderError`]: A header line could not be turned into an HTTP header
//! - [`HttpError`]: Unified error type returned by
//!   [`Communicator`](crate::clients::Communicator)
//!
//! A non-2xx response is **not** an error: the status code is returned to
//! the caller as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use profit365_api::HttpError;
//!
//! match communicator.request(&auth, &request) {
//!     Ok(status) if (200..300).contains(&status) => println!("Accepted ({status})"),
//!     Ok(status) => println!("Rejected with {status}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidHeader(e)) => println!("Bad header: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a header line is not a valid `"Name: Value"` HTTP header.
///
/// # Example
///
/// ```rust
/// use profit365_api::clients::InvalidHeaderError;
///
/// let error = InvalidHeaderError::new("no separator");
/// assert_eq!(error.to_string(), "Invalid header line 'no separator'. Expected 'Name: Value'.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid header line '{line}'. Expected 'Name: Value'.")]
pub struct InvalidHeaderError {
    /// The offending header line.
    pub line: String,
}

impl InvalidHeaderError {
    /// Creates an error for the given line.
    #[must_use]
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

/// Unified error type for request dispatch.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A header line could not be sent.
    #[error(transparent)]
    InvalidHeader(#[from] InvalidHeaderError),

    /// Network, TLS, timeout, or transport construction error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
