//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a `ShopifyConfig`
//! that exists is one that can be used to talk to a shop.

use crate::error::ConfigError;
use std::fmt;

/// An Admin API access token sent as `X-Shopify-Access-Token`.
///
/// Either a custom app's admin token or a legacy private app password.
/// Masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated `*.myshopify.com` shop domain.
///
/// Accepts the short shop name (`my-store`), the full domain
/// (`my-store.myshopify.com`), or either of those with a leading
/// `https://` and trailing `/` as commonly pasted into `SHOPIFY_SHOP_URL`.
///
/// # Example
///
/// ```rust
/// use shopify_mcp::ShopDomain;
///
/// let domain = ShopDomain::new("https://my-store.myshopify.com/").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the value is empty, uses a
    /// non-Shopify domain, or contains characters not allowed in a shop name.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();
        let domain = domain
            .strip_prefix("https://")
            .or_else(|| domain.strip_prefix("http://"))
            .unwrap_or(&domain)
            .trim_end_matches('/')
            .to_string();

        if domain.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        let (shop_name, full_domain) = if let Some(shop_name) = domain.strip_suffix(Self::SUFFIX) {
            (shop_name.to_string(), domain)
        } else if domain.contains('.') {
            return Err(ConfigError::InvalidShopDomain { domain });
        } else {
            (domain.clone(), format!("{}{}", domain, Self::SUFFIX))
        };

        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self(full_domain))
    }

    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A base URL that replaces `https://{shop}` for outgoing API requests.
///
/// Used to route traffic through a proxy or at a local mock server. Only the
/// scheme and authority are kept; any path is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    authority_end: usize,
}

impl HostUrl {
    /// Parses a host URL such as `http://127.0.0.1:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme or host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let authority_start = scheme_end + 3;
        let authority_end = url[authority_start..]
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| authority_start + i);

        let authority = &url[authority_start..authority_end];
        if authority.is_empty() || authority.starts_with(':') {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self { url, authority_end })
    }

    /// Returns `scheme://host[:port]`, suitable as a request base URI.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.url[..self.authority_end]
    }
}
