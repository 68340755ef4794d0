//! The product catalog seam between tool handlers and Shopify.
//!
//! Handlers never talk to [`RestClient`] directly. They ask a
//! [`CatalogConnector`] for a fresh [`ProductCatalog`] at the start of every
//! call and work through that trait, which keeps sessions per call and lets
//! tests substitute an in-memory catalog.

mod pagination;

pub use pagination::{PageSource, PageWalker, StopReason, WalkOutcome, MAX_PAGE_SIZE, PAGE_PACING};

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::Session;
use crate::clients::{RestClient, RestError};
use crate::config::ServerSettings;
use crate::error::ConfigError;
use crate::rest::resources::{Product, ProductListParams};
use crate::rest::{ResourceError, RestResource};

/// One page of a cursor-paginated listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in server order.
    pub items: Vec<T>,
    /// Cursor for the following page; `None` on the last page.
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub const fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }
}

/// Product operations against a remote catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetches one page of at most `limit` products.
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Page<Product>, ResourceError>;

    /// Fetches a product with its variants, options and images.
    async fn find(&self, id: u64) -> Result<Product, ResourceError>;

    /// Creates a product and returns it as stored.
    async fn create(&self, product: &Product) -> Result<Product, ResourceError>;

    /// Replaces a product's object graph in a single save.
    async fn update(&self, product: &Product) -> Result<Product, ResourceError>;

    /// Deletes a product.
    async fn delete(&self, id: u64) -> Result<(), ResourceError>;
}

/// [`ProductCatalog`] backed by the Shopify REST Admin API.
#[derive(Debug)]
pub struct RestCatalog {
    client: RestClient,
}

impl RestCatalog {
    /// Wraps a REST client.
    #[must_use]
    pub const fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductCatalog for RestCatalog {
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Page<Product>, ResourceError> {
        let params = ProductListParams {
            limit: Some(limit),
            page_info: cursor.map(ToString::to_string),
        };
        let response = Product::all(&self.client, Some(params)).await?;
        if let Some(limit) = response.rate_limit() {
            tracing::debug!(
                used = limit.request_count,
                bucket = limit.bucket_size,
                remaining = limit.remaining(),
                "Shopify API call limit"
            );
        }
        let (items, pagination) = response.into_parts();
        Ok(Page::new(items, pagination.next_page_info))
    }

    async fn find(&self, id: u64) -> Result<Product, ResourceError> {
        Ok(Product::find(&self.client, id).await?.into_inner())
    }

    async fn create(&self, product: &Product) -> Result<Product, ResourceError> {
        let product = Product {
            id: None,
            ..product.clone()
        };
        product.save(&self.client).await
    }

    async fn update(&self, product: &Product) -> Result<Product, ResourceError> {
        if product.id.is_none() {
            return Err(ResourceError::NotFound {
                resource: Product::NAME,
                id: "unknown".to_string(),
            });
        }
        product.save(&self.client).await
    }

    async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        Product::delete(&self.client, id).await
    }
}

/// Failure to open a catalog for a tool call.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The Shopify settings are incomplete or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] RestError),
}

/// Opens a [`ProductCatalog`] for a single tool call.
pub trait CatalogConnector: Send + Sync {
    /// Establishes a new session and returns a catalog bound to it.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError`] when credentials are missing or invalid.
    fn connect(&self) -> Result<Box<dyn ProductCatalog>, ConnectError>;
}

/// Connects to Shopify with the server's settings, one session per call.
#[derive(Clone, Debug)]
pub struct RestConnector {
    settings: ServerSettings,
}

impl RestConnector {
    /// Creates a connector for the given settings.
    #[must_use]
    pub const fn new(settings: ServerSettings) -> Self {
        Self { settings }
    }
}

impl CatalogConnector for RestConnector {
    fn connect(&self) -> Result<Box<dyn ProductCatalog>, ConnectError> {
        let config = self.settings.shopify_config()?;
        let session = Session::establish(&config);
        let client = RestClient::new(&session, Some(&config))?;
        Ok(Box::new(RestCatalog::new(client)))
    }
}
