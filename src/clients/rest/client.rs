//! REST client for the Shopify Admin API.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// REST API client for one shop and one API version.
///
/// Paths are normalized so `products`, `/products` and `products.json` all
/// address `/admin/api/{version}/products.json`.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_mcp::{RestClient, Session};
///
/// let session = Session::establish(&config);
/// let client = RestClient::new(&session, Some(&config))?;
///
/// let response = client.get("products", None).await?;
/// let body = serde_json::json!({"product": {"title": "New Product"}});
/// let response = client.post("products", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a REST client for the session, using the configured API
    /// version or [`ApiVersion::DEFAULT`] without configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(session: &Session, config: Option<&ShopifyConfig>) -> Result<Self, RestError> {
        let api_version = config.map_or(ApiVersion::DEFAULT, |c| c.api_version().clone());

        if api_version.is_deprecated() {
            tracing::warn!(
                version = %api_version,
                minimum = %ApiVersion::minimum_supported(),
                "Configured Shopify API version is outside the support window"
            );
        }

        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, session, config)?;

        Ok(Self { http_client })
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty path and
    /// [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
        Ok(self.http_client.request(request).await?)
    }
}

/// Normalizes a REST path: no leading `/`, exactly one `.json` suffix.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim().trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
