//! Authentication schemes accepted by the Profit365 API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The scheme named in the `Authorization` header.
///
/// The `Display` form is the exact token the API expects:
///
/// ```rust
/// use profit365_api::AuthScheme;
///
/// assert_eq!(AuthScheme::ApiKey.to_string(), "apiKey");
/// assert_eq!(AuthScheme::Basic.to_string(), "basic");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthScheme {
    /// A static API key, sent verbatim.
    #[serde(rename = "apiKey")]
    ApiKey,
    /// `user@domain.tld:secret` credentials, sent base64-encoded.
    #[serde(rename = "basic")]
    Basic,
}

impl AuthScheme {
    /// Returns the header token for this scheme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKey => "apiKey",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apikey" | "api_key" => Ok(Self::ApiKey),
            "basic" => Ok(Self::Basic),
            _ => Err(ConfigError::InvalidAuthScheme {
                scheme: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parses_case_insensitively() {
        assert_eq!("apiKey".parse::<AuthScheme>().unwrap(), AuthScheme::ApiKey);
        assert_eq!("API_KEY".parse::<AuthScheme>().unwrap(), AuthScheme::ApiKey);
        assert_eq!("Basic".parse::<AuthScheme>().unwrap(), AuthScheme::Basic);
    }

    #[test]
    fn test_unknown_scheme_is_config_error() {
        let error = "bearer".parse::<AuthScheme>().unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidAuthScheme {
                scheme: "bearer".to_string()
            }
        );
        assert!(error.to_string().contains("'bearer'"));
    }

    #[test]
    fn test_scheme_serializes_to_header_token() {
        assert_eq!(
            serde_json::to_string(&AuthScheme::ApiKey).unwrap(),
            r#""apiKey""#
        );
        let scheme: AuthScheme = serde_json::from_str(r#""basic""#).unwrap();
        assert_eq!(scheme, AuthScheme::Basic);
    }
}
