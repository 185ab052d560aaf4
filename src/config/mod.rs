//! Configuration types for the Profit365 API client.
//!
//! This module provides the configuration used to construct a
//! [`Communicator`](crate::clients::Communicator).
//!
//! # Overview
//!
//! - [`ProfitConfig`]: Transport settings (base URL, API version, timeout)
//! - [`ProfitConfigBuilder`]: A builder for constructing [`ProfitConfig`] instances
//! - [`ClientId`], [`CompanyId`]: Validated GUID newtypes
//! - [`ClientSecret`]: A validated secret newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiVersion`]: The Profit365 API version to use
//!
//! Credentials are not part of [`ProfitConfig`]; they are supplied per call
//! through [`AuthHeader`](crate::auth::AuthHeader).
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use profit365_api::{ProfitConfig, ApiVersion};
//!
//! let config = ProfitConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .timeout(Duration::from_secs(30))
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.profit365.eu");
//! ```

mod newtypes;
mod version;

pub use newtypes::{BaseUrl, ClientId, ClientSecret, CompanyId};
pub use version::ApiVersion;

use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.profit365.eu";

/// Transport configuration for the Profit365 API client.
///
/// # Thread Safety
///
/// `ProfitConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct ProfitConfig {
    base_url: BaseUrl,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ProfitConfig {
    /// Creates a new builder for constructing a `ProfitConfig`.
    #[must_use]
    pub fn builder() -> ProfitConfigBuilder {
        ProfitConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the request timeout, if configured.
    ///
    /// When `None`, the transport's own default applies.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ProfitConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProfitConfig>();
};

/// Builder for constructing [`ProfitConfig`] instances.
///
/// All fields are optional.
///
/// # Defaults
///
/// - `base_url`: `https://api.profit365.eu`
/// - `api_version`: Latest known version (`1.4`)
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ProfitConfigBuilder {
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ProfitConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    ///
    /// Useful for pointing the client at a sandbox or a local mock server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the total request timeout passed through to the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ProfitConfig`].
    #[must_use]
    pub fn build(self) -> ProfitConfig {
        ProfitConfig {
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ProfitConfig::builder().build();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.api_version(), &ApiVersion::V1_4);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let config = ProfitConfig::default();
        assert_eq!(config.base_url(), ProfitConfig::builder().build().base_url());
        assert_eq!(config.api_version(), &ApiVersion::latest());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ProfitConfig::builder()
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .api_version("1.5".parse().unwrap())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("Billing/2.0")
            .build();

        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.api_version().to_string(), "1.5");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent_prefix(), Some("Billing/2.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProfitConfig>();
    }
}
