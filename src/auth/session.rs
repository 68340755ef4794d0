//! Per-call sessions against a Shopify shop.
//!
//! Every tool call establishes its own [`Session`] from the current
//! [`ShopifyConfig`]; sessions are never cached or shared between calls.

use chrono::{DateTime, Utc};

use crate::config::{AccessToken, ShopDomain, ShopifyConfig};

/// An offline (app-level) session for one shop.
///
/// # Example
///
/// ```rust
/// use shopify_mcp::{AccessToken, Session, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .build()
///     .unwrap();
///
/// let session = Session::establish(&config);
/// assert_eq!(session.id, "offline_my-store.myshopify.com");
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// Session identifier, `offline_{shop}`.
    pub id: String,

    /// The shop this session is for.
    pub shop: ShopDomain,

    /// Token sent as `X-Shopify-Access-Token`.
    pub access_token: AccessToken,

    /// When the session was established.
    pub established_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for `shop` using `access_token`.
    #[must_use]
    pub fn new(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self {
            id: format!("offline_{}", shop.as_ref()),
            shop,
            access_token,
            established_at: Utc::now(),
        }
    }

    /// Establishes a fresh session from configuration.
    #[must_use]
    pub fn establish(config: &ShopifyConfig) -> Self {
        let session = Self::new(config.shop().clone(), config.access_token().clone());
        tracing::debug!(session = %session.id, "Established Shopify session");
        session
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
