//! Environment-driven server settings.
//!
//! # Environment Variables
//!
//! - `SHOPIFY_SHOP_URL` - shop domain (`my-store` or `my-store.myshopify.com`)
//! - `SHOPIFY_ADMIN_ACCESS_TOKEN` - Admin API access token
//! - `SHOPIFY_API_PASSWORD` - private app password, used as the access token
//!   when `SHOPIFY_ADMIN_ACCESS_TOKEN` is empty
//! - `SHOPIFY_API_VERSION` - Admin API version (default: 2025-01)
//! - `SHOPIFY_API_HOST` - base URL override for outgoing requests (optional)
//! - `SHOPIFY_USER_AGENT_PREFIX` - prepended to the `User-Agent` header
//!   (optional)
//! - `PORT` - when set, serve over HTTP on `0.0.0.0:PORT` instead of stdio
//!
//! `SHOPIFY_API_KEY` and `SHOPIFY_API_SECRET` only matter for OAuth app
//! installs. Token-authenticated Admin API calls never send them, so they
//! are not read.
//!
//! Shopify credentials are kept as raw strings here and only validated when a
//! tool call establishes its session, so a misconfigured server still starts
//! and answers `tools/list`.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use crate::config::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig};
use crate::error::ConfigError;

/// How the server talks to its MCP client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout.
    Stdio,
    /// HTTP routes bound to the given address.
    Http(SocketAddr),
}

/// Raw settings read once at startup.
#[derive(Clone, Default)]
pub struct ServerSettings {
    /// `SHOPIFY_SHOP_URL`
    pub shop_url: String,
    /// `SHOPIFY_API_PASSWORD`
    pub api_password: String,
    /// `SHOPIFY_API_VERSION`, already validated.
    pub api_version: ApiVersion,
    /// `SHOPIFY_ADMIN_ACCESS_TOKEN`
    pub admin_access_token: String,
    /// `SHOPIFY_API_HOST`
    pub api_host: Option<String>,
    /// `SHOPIFY_USER_AGENT_PREFIX`
    pub user_agent_prefix: Option<String>,
    /// `PORT`
    pub port: Option<u16>,
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("shop_url", &self.shop_url)
            .field("api_password", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .field("admin_access_token", &"[REDACTED]")
            .field("api_host", &self.api_host)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .field("port", &self.port)
            .finish()
    }
}

impl ServerSettings {
    /// Loads settings from the process environment, reading `.env` first if
    /// one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHOPIFY_API_VERSION` or `PORT` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHOPIFY_API_VERSION` or `PORT` is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        let get_optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_version = match get_optional("SHOPIFY_API_VERSION") {
            Some(raw) => raw.parse()?,
            None => ApiVersion::DEFAULT,
        };
        if let ApiVersion::Custom(version) = &api_version {
            tracing::warn!(%version, "Unrecognized Shopify API version; using it as given");
        }

        let port = get_optional("PORT")
            .map(|raw| {
                raw.trim()
                    .parse::<u16>()
                    .ok()
                    .filter(|port| *port != 0)
                    .ok_or(ConfigError::InvalidPort { value: raw })
            })
            .transpose()?;

        Ok(Self {
            shop_url: get("SHOPIFY_SHOP_URL"),
            api_password: get("SHOPIFY_API_PASSWORD"),
            api_version,
            admin_access_token: get("SHOPIFY_ADMIN_ACCESS_TOKEN"),
            api_host: get_optional("SHOPIFY_API_HOST"),
            user_agent_prefix: get_optional("SHOPIFY_USER_AGENT_PREFIX")
                .map(|prefix| prefix.trim().to_string()),
            port,
        })
    }

    /// Returns the transport selected by `PORT`.
    #[must_use]
    pub fn transport(&self) -> Transport {
        self.port.map_or(Transport::Stdio, |port| {
            Transport::Http(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
        })
    }

    /// Validates the Shopify settings into a [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the shop domain is invalid, when neither an
    /// access token nor an API password is set, or when the host override is
    /// malformed.
    pub fn shopify_config(&self) -> Result<ShopifyConfig, ConfigError> {
        let token = if self.admin_access_token.trim().is_empty() {
            &self.api_password
        } else {
            &self.admin_access_token
        };
        if token.trim().is_empty() {
            return Err(ConfigError::MissingRequiredField {
                field: "access_token",
            });
        }

        let mut builder = ShopifyConfig::builder()
            .shop(ShopDomain::new(self.shop_url.as_str())?)
            .access_token(AccessToken::new(token.as_str())?)
            .api_version(self.api_version.clone());

        if let Some(host) = &self.api_host {
            builder = builder.host(HostUrl::new(host.as_str())?);
        }
        if let Some(prefix) = &self.user_agent_prefix {
            builder = builder.user_agent_prefix(prefix.as_str());
        }

        builder.build()
    }
}
