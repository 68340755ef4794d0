//! Outgoing request description for [`HttpClient`](crate::clients::HttpClient).

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the product endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a product or a page of products.
    Get,
    /// Create a product.
    Post,
    /// Update a product.
    Put,
    /// Delete a product.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        })
    }
}

/// A request relative to the client's base path.
///
/// Bodies are always JSON.
///
/// # Example
///
/// ```rust
/// use shopify_mcp::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Put, "products/1.json")
///     .body(json!({"product": {"title": "Renamed"}}))
///     .build()
///     .unwrap();
/// assert_eq!(request.path, "products/1.json");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Path relative to the base path.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters.
    pub query: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Starts building a request.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    /// Checks that POST and PUT requests carry a body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] otherwise.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if validation fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_post_without_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, "products.json").build();
        assert_eq!(
            result.unwrap_err(),
            InvalidHttpRequestError::MissingBody {
                method: "post".to_string()
            }
        );
    }

    #[test]
    fn test_get_and_delete_need_no_body() {
        assert!(HttpRequest::builder(HttpMethod::Get, "products.json")
            .build()
            .is_ok());
        assert!(HttpRequest::builder(HttpMethod::Delete, "products/1.json")
            .build()
            .is_ok());
    }

    #[test]
    fn test_query_is_kept() {
        let query = HashMap::from([
            ("limit".to_string(), "50".to_string()),
            ("page_info".to_string(), "abc".to_string()),
        ]);
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .query(query)
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("page_info"), Some(&"abc".to_string()));
    }

    #[test]
    fn test_put_with_body_builds() {
        let request = HttpRequest::builder(HttpMethod::Put, "products/1.json")
            .body(json!({"product": {}}))
            .build()
            .unwrap();
        assert_eq!(request.body, Some(json!({"product": {}})));
    }
}
