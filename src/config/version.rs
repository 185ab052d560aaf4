//! Profit365 API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Profit365 API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Profit365 API version.
///
/// The version is the first path segment of every request URL
/// (`https://api.profit365.eu/1.4/...`). A `Custom` variant covers
/// versions released after this crate.
///
/// # Example
///
/// ```rust
/// use profit365_api::ApiVersion;
///
/// let version: ApiVersion = "1.4".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1_4);
/// assert_eq!(ApiVersion::latest().to_string(), "1.4");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1.4
    V1_4,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1_4
    }

    /// Returns `true` if this is a version known to this crate.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: MAJOR.MINOR
        let Some((major, minor)) = s.split_once('.') else {
            return false;
        };

        !major.is_empty()
            && !minor.is_empty()
            && major.chars().all(|c| c.is_ascii_digit())
            && minor.chars().all(|c| c.is_ascii_digit())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1_4 => f.write_str("1.4"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "1.4" => Ok(Self::V1_4),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
