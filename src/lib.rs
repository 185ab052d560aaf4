//! # Profit365 API Rust Client
//!
//! A Rust client for the Profit365 invoicing and accounting API, providing
//! validated credentials, typed request payloads, and a synchronous HTTP
//! transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - Credential validation and authentication headers via [`AuthCredentials`]
//!   and [`AuthHeader`]
//! - Ordered JSON payload building via [`data::Document`] and the invoice
//!   types in [`data`]
//! - An extensible request contract via [`ApiRequest`], with concrete
//!   operations in [`requests`]
//! - A blocking HTTP transport via [`Communicator`], configured through
//!   [`ProfitConfig`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use profit365_api::{
//!     AuthCredentials, AuthHeader, AuthScheme, ClientId, ClientSecret, Communicator,
//! };
//! use profit365_api::data::{InvoiceData, InvoiceRowData};
//! use profit365_api::requests::SaleInvoiceCreateRequest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Basic keys are validated and base64-encoded here
//! let credentials = AuthCredentials::new(
//!     AuthScheme::Basic,
//!     "jane@example.com:s3cret",
//!     ClientSecret::new("client-secret")?,
//!     ClientId::new("11111111-1111-1111-1111-111111111111")?,
//!     None,
//! )?;
//! let auth = AuthHeader::new(credentials);
//!
//! let invoice = InvoiceData::new(
//!     "2024-01-01T00:00:00Z",
//!     vec![InvoiceRowData::new("Widget", 9.99, 2)?],
//! );
//! let request = SaleInvoiceCreateRequest::new(&invoice)?;
//!
//! // POST https://api.profit365.eu/1.4/sales/invoices
//! let status = Communicator::with_defaults()?.request(&auth, &request)?;
//! assert!((200..300).contains(&status));
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use profit365_api::{BaseUrl, ProfitConfig};
//!
//! let config = ProfitConfig::builder()
//!     .base_url(BaseUrl::new("https://sandbox.example.com").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials and newtypes validate on construction
//! - **Synchronous**: One blocking call per request, no retries, no pooling
//! - **Status only**: Response bodies are never read; callers interpret the status
//! - **Immutable requests**: Credentials and request specs never change after
//!   construction

pub mod auth;
pub mod clients;
pub mod config;
pub mod data;
pub mod error;
pub mod requests;

// Re-export public types at crate root for convenience
pub use auth::{AuthCredentials, AuthHeader, AuthScheme, AuthenticationFormatError};
pub use config::{
    ApiVersion, BaseUrl, ClientId, ClientSecret, CompanyId, ProfitConfig, ProfitConfigBuilder,
};
pub use error::{ConfigError, DataError};

// Re-export HTTP client types
pub use clients::{
    ApiRequest, Communicator, HeaderContributor, HeaderSet, HttpError, InvalidHeaderError,
    RequestSpec, RequestType,
};
