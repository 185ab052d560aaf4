//! Request dispatch for the Profit365 API.
//!
//! This module provides the [`Communicator`] type, which turns an
//! [`ApiRequest`] plus a [`HeaderContributor`] into one synchronous HTTP
//! call and reports the response status.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;

use crate::clients::errors::{HttpError, InvalidHeaderError};
use crate::clients::headers::{split_header_line, HeaderContributor, HeaderSet};
use crate::clients::request::{ApiRequest, RequestType};
use crate::config::{ApiVersion, ProfitConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Synchronous HTTP client for the Profit365 API.
///
/// Each call to [`request`](Self::request):
/// - collects header lines from the contributor, then the request's own
///   lines, then `Content-Type` for JSON posts
/// - targets `<base url>/<api version>/<context>`
/// - sends the request and returns the status code without reading the body
///
/// Idle connections are not pooled: the connection used by a call is
/// released before `request` returns.
///
/// # Thread Safety
///
/// `Communicator` is `Send + Sync`. It must not be constructed, used or
/// dropped from inside an async runtime; use `spawn_blocking` there.
///
/// # Example
///
/// ```rust,no_run
/// use profit365_api::{AuthCredentials, AuthHeader, ClientId, ClientSecret, Communicator};
/// use profit365_api::data::{InvoiceData, InvoiceRowData};
/// use profit365_api::requests::SaleInvoiceCreateRequest;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = AuthHeader::new(AuthCredentials::api_key(
///     "abc123",
///     ClientSecret::new("s3cret")?,
///     ClientId::new("11111111-1111-1111-1111-111111111111")?,
///     None,
/// ));
///
/// let invoice = InvoiceData::new(
///     "2024-01-01T00:00:00Z",
///     vec![InvoiceRowData::new("Widget", 9.99, 2)?],
/// );
/// let request = SaleInvoiceCreateRequest::new(&invoice)?;
///
/// let status = Communicator::with_defaults()?.request(&auth, &request)?;
/// println!("Profit365 answered {status}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Communicator {
    /// The internal reqwest blocking client.
    client: Client,
    /// Base URL without trailing slash (e.g., `https://api.profit365.eu`).
    base_url: String,
    /// API version path segment.
    api_version: ApiVersion,
    /// `User-Agent` sent with every request.
    user_agent: String,
}

// Verify Communicator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Communicator>();
};

impl Communicator {
    /// Creates a communicator from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be initialized
    /// (e.g., TLS backend failure).
    pub fn new(config: &ProfitConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Profit365 API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut builder = Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent.clone())
            .pool_max_idle_per_host(0);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            api_version: config.api_version().clone(),
            user_agent,
        })
    }

    /// Creates a communicator for the production API at the latest version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be initialized.
    pub fn with_defaults() -> Result<Self, HttpError> {
        Self::new(&ProfitConfig::default())
    }

    /// Returns the base URL for this communicator.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API version for this communicator.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the full URL for `context`.
    ///
    /// Plain concatenation; `context` is not escaped.
    #[must_use]
    pub fn build_url(&self, context: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_version, context)
    }

    /// Returns the header lines that [`request`](Self::request) would send,
    /// in order: contributor lines, request lines, then `Content-Type` if
    /// the request type has one.
    ///
    /// Lines are appended, never merged by name.
    #[must_use]
    pub fn compose_headers<C, R>(contributor: &C, request: &R) -> HeaderSet
    where
        C: HeaderContributor + ?Sized,
        R: ApiRequest + ?Sized,
    {
        let mut headers = contributor.component_result();
        if let Some(extra) = request.header_array() {
            headers.extend_from_slice(extra);
        }
        if let Some(content_type) = request.request_type().as_content_type() {
            headers.push_header("Content-Type", content_type);
        }
        headers
    }

    /// Sends `request` authenticated by `contributor` and returns the HTTP
    /// status code.
    ///
    /// Any status, including 4xx and 5xx, is returned as `Ok`. The response
    /// body is discarded unread.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A header line is malformed (`InvalidHeader`); nothing is sent
    /// - No response was received: DNS, connect, TLS or timeout failure
    ///   (`Network`)
    pub fn request<C, R>(&self, contributor: &C, request: &R) -> Result<u16, HttpError>
    where
        C: HeaderContributor + ?Sized,
        R: ApiRequest + ?Sized,
    {
        let headers = Self::header_map(&Self::compose_headers(contributor, request))?;
        let url = self.build_url(request.context());

        let (method, body) = match request.request_type() {
            RequestType::PostJson => (
                Method::POST,
                Some(request.content().unwrap_or_default().to_string()),
            ),
            RequestType::Get => (Method::GET, None),
            RequestType::PostXml => {
                tracing::warn!(
                    "XML requests have no transport configuration; sending {} as GET without body",
                    request.context()
                );
                (Method::GET, None)
            }
        };

        tracing::debug!(method = %method, url = %url, "Sending Profit365 API request");

        let mut req_builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send()?;
        let status = response.status().as_u16();
        drop(response);

        tracing::debug!(status, url = %url, "Profit365 API request completed");
        Ok(status)
    }

    /// Converts header lines into a `HeaderMap`, keeping duplicates.
    fn header_map(headers: &HeaderSet) -> Result<HeaderMap, InvalidHeaderError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for line in headers {
            let (name, value) = split_header_line(line)?;
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| InvalidHeaderError::new(line.as_str()))?;
            let value = HeaderValue::from_bytes(value.as_bytes())
                .map_err(|_| InvalidHeaderError::new(line.as_str()))?;
            map.append(name, value);
        }
        Ok(map)
    }
}
