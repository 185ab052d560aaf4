//! The authentication header provider.

use crate::auth::AuthCredentials;
use crate::clients::{HeaderContributor, HeaderSet};

/// Derives the authentication headers for every outgoing request.
///
/// The lines are produced in a fixed order:
///
/// 1. `ClientID: <client id>`
/// 2. `ClientSecret: <client secret>`
/// 3. `Authorization: <scheme> <key>`
/// 4. `CompanyID: <company id>`, only when a company ID is set
///
/// # Example
///
/// ```rust
/// use profit365_api::{AuthCredentials, AuthHeader, ClientId, ClientSecret, HeaderContributor};
///
/// let credentials = AuthCredentials::api_key(
///     "abc123",
///     ClientSecret::new("s3cret").unwrap(),
///     ClientId::new("11111111-1111-1111-1111-111111111111").unwrap(),
///     None,
/// );
/// let headers = AuthHeader::new(credentials).component_result();
///
/// assert_eq!(
///     headers.lines(),
///     [
///         "ClientID: 11111111-1111-1111-1111-111111111111",
///         "ClientSecret: s3cret",
///         "Authorization: apiKey abc123",
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthHeader {
    credentials: AuthCredentials,
}

impl AuthHeader {
    /// Creates a provider for the given credentials.
    #[must_use]
    pub const fn new(credentials: AuthCredentials) -> Self {
        Self { credentials }
    }

    /// Returns the underlying credentials.
    #[must_use]
    pub const fn credentials(&self) -> &AuthCredentials {
        &self.credentials
    }
}

impl From<AuthCredentials> for AuthHeader {
    fn from(credentials: AuthCredentials) -> Self {
        Self::new(credentials)
    }
}

impl HeaderContributor for AuthCredentials {
    fn component_result(&self) -> HeaderSet {
        let mut headers = HeaderSet::new();
        headers.push_header("ClientID", self.client_id());
        headers.push_header("ClientSecret", self.client_secret().as_ref());
        headers.push_header(
            "Authorization",
            format_args!("{} {}", self.scheme(), self.key()),
        );
        if let Some(company_id) = self.company_id() {
            headers.push_header("CompanyID", company_id);
        }
        headers
    }
}

impl HeaderContributor for AuthHeader {
    fn component_result(&self) -> HeaderSet {
        self.credentials.component_result()
    }
}
