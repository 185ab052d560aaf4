//! Authentication types for the Profit365 API client.
//!
//! # Overview
//!
//! - [`AuthScheme`]: `apiKey` or `basic`
//! - [`AuthCredentials`]: Validated, immutable credentials
//! - [`AuthHeader`]: Derives the authentication header lines for each request
//! - [`validate_basic_auth_format`]: The Basic key shape check
//!
//! # Schemes
//!
//! - **API key**: a static token, sent as `Authorization: apiKey <token>`.
//! - **Basic**: `user@domain.tld:secret`, validated when the credentials are
//!   built and sent as `Authorization: basic <base64>`.
//!
//! # Example
//!
//! ```rust
//! use profit365_api::{AuthCredentials, AuthScheme, ClientId, ClientSecret};
//! use profit365_api::auth::AuthenticationFormatError;
//!
//! let result = AuthCredentials::new(
//!     AuthScheme::Basic,
//!     "not-an-email",
//!     ClientSecret::new("s3cret").unwrap(),
//!     ClientId::new("11111111-1111-1111-1111-111111111111").unwrap(),
//!     None,
//! );
//! assert_eq!(result, Err(AuthenticationFormatError));
//! ```

mod credentials;
mod header;
mod scheme;

pub use credentials::{validate_basic_auth_format, AuthCredentials, AuthenticationFormatError};
pub use header::AuthHeader;
pub use scheme::AuthScheme;
