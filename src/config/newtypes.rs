//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Returns `true` if `value` has the `8-4-4-4-12` hexadecimal GUID shape.
fn is_guid(value: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == GROUPS.len()
        && parts
            .iter()
            .zip(GROUPS)
            .all(|(part, len)| part.len() == len && part.chars().all(|c| c.is_ascii_hexdigit()))
}

/// The GUID identifying an API client application.
///
/// Sent on every request as the `ClientID` header.
///
/// # Example
///
/// ```rust
/// use profit365_api::ClientId;
///
/// let id = ClientId::new("11111111-1111-1111-1111-111111111111").unwrap();
/// assert_eq!(id.as_ref(), "11111111-1111-1111-1111-111111111111");
/// assert!(ClientId::new("not-a-guid").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidClientId`] if the value is not a GUID.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim().to_string();
        if !is_guid(&id) {
            return Err(ConfigError::InvalidClientId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The GUID of the company (ledger) a request operates on.
///
/// Optional; when present it is sent as the `CompanyID` header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompanyId(String);

impl CompanyId {
    /// Creates a new validated company ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCompanyId`] if the value is not a GUID.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        let id = id.trim().to_string();
        if !is_guid(&id) {
            return Err(ConfigError::InvalidCompanyId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for CompanyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated client secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use profit365_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// The API base URL, without the version segment.
///
/// Trailing slashes are dropped so the URL can be joined with `/`.
///
/// # Serialization
///
/// `BaseUrl` serializes to and deserializes from the URL string:
///
/// ```rust
/// use profit365_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.profit365.eu/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.profit365.eu");
/// assert_eq!(url.host_name(), "api.profit365.eu");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no alphabetic
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let url = super::DEFAULT_BASE_URL.to_string();
        let host_start = url.find("://").map_or(0, |i| i + 3);
        Self {
            host_end: url.len(),
            host_start,
            url,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_accepts_guid() {
        let id = ClientId::new("11111111-1111-1111-1111-111111111111").unwrap();
        assert_eq!(id.as_ref(), "11111111-1111-1111-1111-111111111111");

        // Upper-case hex is accepted as-is
        let id = ClientId::new("A1B2C3D4-E5F6-A7B8-C9D0-E1F2A3B4C5D6").unwrap();
        assert_eq!(id.to_string(), "A1B2C3D4-E5F6-A7B8-C9D0-E1F2A3B4C5D6");
    }

    #[test]
    fn test_client_id_rejects_invalid() {
        assert!(matches!(
            ClientId::new(""),
            Err(ConfigError::InvalidClientId { .. })
        ));
        assert!(ClientId::new("not-a-guid").is_err());
        assert!(ClientId::new("11111111-1111-1111-1111-11111111111").is_err());
        assert!(ClientId::new("11111111111111111111111111111111").is_err());
        assert!(ClientId::new("g1111111-1111-1111-1111-111111111111").is_err());
    }

    #[test]
    fn test_company_id_rejects_invalid() {
        assert!(matches!(
            CompanyId::new("company"),
            Err(ConfigError::InvalidCompanyId { id }) if id == "company"
        ));
        assert!(CompanyId::new("22222222-2222-2222-2222-222222222222").is_ok());
    }

    #[test]
    fn test_client_secret_rejects_empty_string() {
        assert!(matches!(
            ClientSecret::new(""),
            Err(ConfigError::EmptyClientSecret)
        ));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.host_name(), "127.0.0.1");

        let url = BaseUrl::new("https://api.profit365.eu///").unwrap();
        assert_eq!(url.as_ref(), "https://api.profit365.eu");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.profit365.eu").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://api.profit365.eu").is_err());
    }

    #[test]
    fn test_base_url_default_is_production() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), "https://api.profit365.eu");
        assert_eq!(url.host_name(), "api.profit365.eu");
    }

    #[test]
    fn test_base_url_deserializes_from_string() {
        let url: BaseUrl = serde_json::from_str(r#""https://sandbox.example.com/""#).unwrap();
        assert_eq!(url.as_ref(), "https://sandbox.example.com");

        let result: Result<BaseUrl, _> = serde_json::from_str(r#""nope""#);
        assert!(result.is_err());
    }
}
