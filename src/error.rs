//! Configuration error types.
//!
//! Every configuration constructor in this crate returns
//! `Result<T, ConfigError>`. Configuration is validated each time a tool call
//! establishes its session, so these messages end up in front of the person
//! driving the MCP client and are written to say what to fix.
//!
//! # Example
//!
//! ```rust
//! use shopify_mcp::{ConfigError, ShopDomain};
//!
//! let result = ShopDomain::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidShopDomain { .. })));
//! ```

use thiserror::Error;

/// Errors raised while building or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Set SHOPIFY_ADMIN_ACCESS_TOKEN to an Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Set SHOPIFY_SHOP_URL to 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Set SHOPIFY_API_VERSION to a release such as '2025-01', or leave it unset.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://127.0.0.1:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// `PORT` is set but is not a TCP port number.
    #[error("Invalid port '{value}'. PORT must be a number between 1 and 65535.")]
    InvalidPort {
        /// The raw value read from the environment.
        value: String,
    },
}
