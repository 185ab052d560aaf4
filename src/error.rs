//! Error types for the Profit365 API client.
//!
//! This module contains the error types used for configuration, credential
//! validation and payload building.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use profit365_api::{ClientSecret, ConfigError};
//!
//! let result = ClientSecret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientSecret)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the ClientSecret issued for your application.")]
    EmptyClientSecret,

    /// Client ID is not a GUID.
    #[error("Invalid client ID '{id}'. Expected a GUID (e.g., '11111111-1111-1111-1111-111111111111').")]
    InvalidClientId {
        /// The invalid ID that was provided.
        id: String,
    },

    /// Company ID is not a GUID.
    #[error("Invalid company ID '{id}'. Expected a GUID (e.g., '11111111-1111-1111-1111-111111111111').")]
    InvalidCompanyId {
        /// The invalid ID that was provided.
        id: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'MAJOR.MINOR' (e.g., '1.4').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.profit365.eu').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Authentication scheme is not recognized.
    #[error("Invalid authentication scheme '{scheme}'. Expected 'apiKey' or 'basic'.")]
    InvalidAuthScheme {
        /// The scheme string that was provided.
        scheme: String,
    },
}

/// Errors that can occur while building a request payload.
#[derive(Debug, Error)]
pub enum DataError {
    /// A numeric field is NaN or infinite and has no JSON representation.
    #[error("Field '{key}' must be a finite number.")]
    NonFiniteNumber {
        /// The field being set.
        key: String,
    },

    /// The payload could not be serialized.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
