//! HTTP client for Admin API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to one shop. Each request is attempted exactly once.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound for a single request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one shop and one API base path.
///
/// The client handles:
/// - Base URI construction from the session's shop or the configured host
/// - Default headers including User-Agent and access token
/// - Shopify-specific header parsing and deprecation logging
///
/// # Example
///
/// ```rust,ignore
/// use shopify_mcp::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new("/admin/api/2025-01", &session, Some(&config))?;
/// let request = HttpRequest::builder(HttpMethod::Get, "products.json").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., `/admin/api/2025-01`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the session's shop.
    ///
    /// When `config` carries a host override, requests go to that host
    /// instead of `https://{shop}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(
        base_path: impl Into<String>,
        session: &Session,
        config: Option<&ShopifyConfig>,
    ) -> Result<Self, HttpError> {
        let base_uri = config
            .and_then(ShopifyConfig::host)
            .map_or_else(
                || format!("https://{}", session.shop.as_ref()),
                |host| host.base_uri().to_string(),
            );

        let user_agent_prefix = config
            .and_then(ShopifyConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}shopify-mcp v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            session.access_token.as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// Sends one request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending Shopify request");

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 400 {
                    serde_json::json!({ "errors": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                path = %request.path,
                reason = %reason,
                "Deprecated request to Shopify API"
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Collects the error fields of a failed response into a JSON string.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, HostUrl, ShopDomain};
    use serde_json::json;
    use wiremock::matchers::{header, header_regex, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_session() -> Session {
        Session::new(
            ShopDomain::new("test-shop").unwrap(),
            AccessToken::new("test-access-token").unwrap(),
        )
    }

    fn config_for(server: &MockServer) -> ShopifyConfig {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .host(HostUrl::new(server.uri()).unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_request_sends_default_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/api/2025-01/shop.json"))
            .and(header("X-Shopify-Access-Token", "test-access-token"))
            .and(header("Accept", "application/json"))
            .and(header_regex("User-Agent", r"^shopify-mcp v\S+ \| Rust "))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client =
            HttpClient::new("/admin/api/2025-01", &create_test_session(), Some(&config)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
            .build()
            .unwrap();

        assert_eq!(client.request(request).await.unwrap().code, 200);
    }

    #[tokio::test]
    async fn test_user_agent_with_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header_regex("User-Agent", r"^MyApp/1\.0 \| shopify-mcp v"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .host(HostUrl::new(server.uri()).unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client =
            HttpClient::new("/admin/api/2025-01", &create_test_session(), Some(&config)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "shop.json")
            .build()
            .unwrap();

        assert!(client.request(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_request_sends_token_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/api/2025-01/products.json"))
            .and(header("X-Shopify-Access-Token", "test-access-token"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client =
            HttpClient::new("/admin/api/2025-01", &create_test_session(), Some(&config)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .query(HashMap::from([("limit".to_string(), "5".to_string())]))
            .build()
            .unwrap();

        let response = client.request(request).await.unwrap();
        assert_eq!(response.body, json!({"products": []}));
    }

    #[tokio::test]
    async fn test_non_2xx_is_returned_as_response_error_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/api/2025-01/products.json"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("X-Request-Id", "req-429")
                    .set_body_json(json!({"errors": "Exceeded 2 calls per second"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client =
            HttpClient::new("/admin/api/2025-01", &create_test_session(), Some(&config)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .build()
            .unwrap();

        let error = client.request(request).await.unwrap_err();
        match error {
            HttpError::Response(e) => {
                assert_eq!(e.code, 429);
                assert!(e.message.contains("Exceeded 2 calls per second"));
                assert!(e.message.contains("req-429"));
                assert_eq!(e.error_reference.as_deref(), Some("req-429"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_text_error_body_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client =
            HttpClient::new("/admin/api/2025-01", &create_test_session(), Some(&config)).unwrap();
        let request = HttpRequest::builder(HttpMethod::Delete, "products/1.json")
            .build()
            .unwrap();

        let error = client.request(request).await.unwrap_err();
        assert!(error.to_string().contains("upstream unavailable"));
    }
}
