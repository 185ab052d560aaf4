//! Validated API credentials.
//!
//! [`AuthCredentials`] holds everything needed to authenticate a request.
//! Basic keys are checked with [`validate_basic_auth_format`] and stored
//! base64-encoded; API keys are stored as given.

use std::fmt;
use std::sync::OnceLock;

use base64::prelude::*;
use regex::Regex;
use thiserror::Error;

use crate::auth::AuthScheme;
use crate::config::{ClientId, ClientSecret, CompanyId};

/// `<local>@<domain>.<tld>:<secret>`, every segment non-empty. Segments may
/// contain line breaks.
const BASIC_AUTH_PATTERN: &str = r"(?s)^.+@.+\..+:.+$";

fn basic_auth_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BASIC_AUTH_PATTERN).expect("basic auth pattern is valid"))
}

/// Returns `true` if `key` has the `user@domain.tld:secret` shape required
/// for Basic authentication.
///
/// # Example
///
/// ```rust
/// use profit365_api::auth::validate_basic_auth_format;
///
/// assert!(validate_basic_auth_format("jane@example.com:s3cret"));
/// assert!(!validate_basic_auth_format("not-an-email"));
/// assert!(!validate_basic_auth_format("jane@example.com"));
/// ```
#[must_use]
pub fn validate_basic_auth_format(key: &str) -> bool {
    basic_auth_regex().is_match(key)
}

/// Error returned when a Basic key does not match `user@domain.tld:secret`.
///
/// The offending key is deliberately not part of the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Basic authorization requires a key of the form 'user@domain.tld:secret'.")]
pub struct AuthenticationFormatError;

/// Credentials for the Profit365 API.
///
/// Immutable once constructed. The stored key is the value sent after the
/// scheme in the `Authorization` header.
///
/// # Security
///
/// The `Debug` implementation masks the key and the secret.
///
/// # Example
///
/// ```rust
/// use profit365_api::{AuthCredentials, AuthScheme, ClientId, ClientSecret};
///
/// let credentials = AuthCredentials::new(
///     AuthScheme::Basic,
///     "jane@example.com:s3cret",
///     ClientSecret::new("client-secret").unwrap(),
///     ClientId::new("11111111-1111-1111-1111-111111111111").unwrap(),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(credentials.key(), "amFuZUBleGFtcGxlLmNvbTpzM2NyZXQ=");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthCredentials {
    scheme: AuthScheme,
    key: String,
    client_secret: ClientSecret,
    client_id: ClientId,
    company_id: Option<CompanyId>,
}

impl AuthCredentials {
    /// Creates credentials, validating and encoding Basic keys.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationFormatError`] if `scheme` is
    /// [`AuthScheme::Basic`] and `key` fails [`validate_basic_auth_format`].
    pub fn new(
        scheme: AuthScheme,
        key: impl Into<String>,
        client_secret: ClientSecret,
        client_id: ClientId,
        company_id: Option<CompanyId>,
    ) -> Result<Self, AuthenticationFormatError> {
        let key: String = key.into();
        let key = match scheme {
            AuthScheme::Basic => {
                if !validate_basic_auth_format(&key) {
                    return Err(AuthenticationFormatError);
                }
                BASE64_STANDARD.encode(key.as_bytes())
            }
            AuthScheme::ApiKey => key,
        };

        Ok(Self {
            scheme,
            key,
            client_secret,
            client_id,
            company_id,
        })
    }

    /// Creates API-key credentials. API keys are never validated.
    #[must_use]
    pub fn api_key(
        key: impl Into<String>,
        client_secret: ClientSecret,
        client_id: ClientId,
        company_id: Option<CompanyId>,
    ) -> Self {
        Self {
            scheme: AuthScheme::ApiKey,
            key: key.into(),
            client_secret,
            client_id,
            company_id,
        }
    }

    /// Returns the authentication scheme.
    #[must_use]
    pub const fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Returns the stored key (base64-encoded for Basic credentials).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the company ID, if set.
    #[must_use]
    pub const fn company_id(&self) -> Option<&CompanyId> {
        self.company_id.as_ref()
    }
}

impl fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("scheme", &self.scheme)
            .field("key", &"*****")
            .field("client_secret", &self.client_secret)
            .field("client_id", &self.client_id)
            .field("company_id", &self.company_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> ClientSecret {
        ClientSecret::new("client-secret").unwrap()
    }

    fn client_id() -> ClientId {
        ClientId::new("11111111-1111-1111-1111-111111111111").unwrap()
    }

    #[test]
    fn test_validate_accepts_email_and_secret() {
        assert!(validate_basic_auth_format("jane@example.com:s3cret"));
        assert!(validate_basic_auth_format("jane.doe@mail.example.co.uk:p@ss:word"));
        assert!(validate_basic_auth_format("a@b.c:d"));
        assert!(validate_basic_auth_format("jane@example.com:pa\nss"));
    }

    #[test]
    fn test_validate_rejects_other_shapes() {
        assert!(!validate_basic_auth_format(""));
        assert!(!validate_basic_auth_format("not-an-email"));
        assert!(!validate_basic_auth_format("jane@example.com"));
        assert!(!validate_basic_auth_format("jane@example.com:"));
        assert!(!validate_basic_auth_format("@example.com:secret"));
        assert!(!validate_basic_auth_format("jane@example:secret"));
        assert!(!validate_basic_auth_format("jane@example.:secret"));
        assert!(!validate_basic_auth_format("jane:secret"));
    }

    #[test]
    fn test_basic_key_is_base64_encoded() {
        let credentials = AuthCredentials::new(
            AuthScheme::Basic,
            "user@example.com:pass",
            secret(),
            client_id(),
            None,
        )
        .unwrap();

        assert_eq!(credentials.scheme(), AuthScheme::Basic);
        assert_eq!(credentials.key(), "dXNlckBleGFtcGxlLmNvbTpwYXNz");
        assert_eq!(
            BASE64_STANDARD.decode(credentials.key()).unwrap(),
            b"user@example.com:pass"
        );
    }

    #[test]
    fn test_malformed_basic_key_is_rejected() {
        let result = AuthCredentials::new(
            AuthScheme::Basic,
            "not-an-email",
            secret(),
            client_id(),
            None,
        );
        assert_eq!(result, Err(AuthenticationFormatError));
    }

    #[test]
    fn test_api_key_is_stored_verbatim() {
        for key in ["abc123", "not-an-email", "", "  spaced  ", "ünïcødé"] {
            let credentials =
                AuthCredentials::new(AuthScheme::ApiKey, key, secret(), client_id(), None)
                    .unwrap();
            assert_eq!(credentials.key(), key);
        }

        let credentials = AuthCredentials::api_key("abc123", secret(), client_id(), None);
        assert_eq!(credentials.scheme(), AuthScheme::ApiKey);
        assert_eq!(credentials.key(), "abc123");
    }

    #[test]
    fn test_debug_masks_key_and_secret() {
        let credentials = AuthCredentials::api_key("abc123", secret(), client_id(), None);
        let debug_output = format!("{credentials:?}");
        assert!(!debug_output.contains("abc123"));
        assert!(!debug_output.contains("client-secret"));
        assert!(debug_output.contains("11111111-1111-1111-1111-111111111111"));
    }

    #[test]
    fn test_error_message_does_not_leak_key() {
        let message = AuthenticationFormatError.to_string();
        assert!(message.contains("user@domain.tld:secret"));
    }
}
