//! Configuration for talking to a Shopify shop.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: validated, immutable settings for one shop
//! - [`ShopifyConfigBuilder`]: builder for [`ShopifyConfig`]
//! - [`ServerSettings`]: raw values read from the process environment
//! - [`AccessToken`], [`ShopDomain`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version to call
//!
//! # Example
//!
//! ```rust
//! use shopify_mcp::{AccessToken, ApiVersion, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2025_01)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod env;
mod newtypes;
mod version;

pub use env::{ServerSettings, Transport};
pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Validated settings for calling one shop's Admin API.
///
/// Built fresh at the start of every tool call from [`ServerSettings`], so a
/// change in credentials never leaves a stale session behind.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the Admin API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the Admin API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URL override, if any.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the `User-Agent` prefix, if any.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and `access_token` are required; everything else is optional and
/// the API version defaults to [`ApiVersion::DEFAULT`].
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Admin API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the Admin API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to `host` instead of `https://{shop}`.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` was not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(ShopifyConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_default(),
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> ShopDomain {
        ShopDomain::new("test-shop").unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::new("shpat_test").unwrap()
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = ShopifyConfigBuilder::new().access_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ShopifyConfigBuilder::new().shop(shop()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::DEFAULT);
        assert!(config.host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_keeps_optional_values() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .api_version(ApiVersion::V2025_04)
            .host(HostUrl::new("http://127.0.0.1:9999").unwrap())
            .user_agent_prefix("acme")
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2025_04);
        assert_eq!(config.host().unwrap().base_uri(), "http://127.0.0.1:9999");
        assert_eq!(config.user_agent_prefix(), Some("acme"));
    }

    #[test]
    fn test_debug_output_masks_credentials() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .build()
            .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("shpat_test"));
    }
}
