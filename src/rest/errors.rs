//! Resource-level error types.
//!
//! [`ResourceError`] gives failed REST calls a meaning in terms of the
//! resource being worked on: a 404 becomes [`ResourceError::NotFound`], a 422
//! becomes [`ResourceError::ValidationFailed`] with the per-field messages
//! Shopify returned, and everything else stays an HTTP or REST error.

use std::collections::BTreeMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type name (e.g., "Product").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Shopify rejected the payload (HTTP 422).
    #[error("Validation failed: {}", format_validation_errors(.errors))]
    ValidationFailed {
        /// Field name to messages; array-shaped errors are stored under `base`.
        errors: BTreeMap<String, Vec<String>>,
        /// The request ID for debugging (from `X-Request-Id`).
        request_id: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response body for '{key}': {message}")]
    UnexpectedBody {
        /// The envelope key that was expected (e.g., "products").
        key: String,
        /// What went wrong.
        message: String,
    },

    /// The resource could not be serialized into a request body.
    #[error("Failed to serialize {resource}: {source}")]
    Serialization {
        /// The resource type name.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A REST-level error that carries no resource meaning.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Classifies a failed REST call made on behalf of `resource`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_mcp::clients::{HttpError, HttpResponseError, RestError};
    /// use shopify_mcp::rest::ResourceError;
    ///
    /// let error = RestError::Http(HttpError::Response(HttpResponseError {
    ///     code: 404,
    ///     message: r#"{"errors":"Not Found"}"#.to_string(),
    ///     error_reference: None,
    /// }));
    ///
    /// let error = ResourceError::from_rest_error(error, "Product", Some("42"));
    /// assert_eq!(error.to_string(), "Product with id 42 not found");
    /// ```
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        let RestError::Http(HttpError::Response(response)) = error else {
            return Self::Rest(error);
        };

        match response.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => {
                let body = serde_json::from_str(&response.message).unwrap_or_default();
                Self::ValidationFailed {
                    errors: parse_validation_errors(&body),
                    request_id: response.error_reference,
                }
            }
            _ => Self::Rest(RestError::Http(HttpError::Response(response))),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Parses Shopify's validation error payload.
///
/// Shopify uses three shapes: `{"errors": {"field": ["msg"]}}`,
/// `{"errors": ["msg"]}` and `{"errors": "msg"}`.
fn parse_validation_errors(body: &serde_json::Value) -> BTreeMap<String, Vec<String>> {
    let mut result = BTreeMap::new();

    let messages = |value: &serde_json::Value| -> Vec<String> {
        match value {
            serde_json::Value::Array(arr) => arr
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                .collect(),
            serde_json::Value::String(s) => vec![s.clone()],
            other => vec![other.to_string()],
        }
    };

    match body.get("errors") {
        Some(serde_json::Value::Object(map)) => {
            for (field, value) in map {
                result.insert(field.clone(), messages(value));
            }
        }
        Some(value @ (serde_json::Value::Array(_) | serde_json::Value::String(_))) => {
            let msgs = messages(value);
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        _ => {}
    }

    result
}

fn format_validation_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    if errors.is_empty() {
        return "no details returned".to_string();
    }
    errors
        .iter()
        .map(|(field, msgs)| format!("{field} {}", msgs.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    fn http_failure(code: u16, body: &serde_json::Value, request_id: Option<&str>) -> RestError {
        RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message: body.to_string(),
            error_reference: request_id.map(ToString::to_string),
        }))
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let error = ResourceError::from_rest_error(
            http_failure(404, &json!({"errors": "Not Found"}), None),
            "Product",
            Some("123"),
        );

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "Product", ref id } if id == "123"
        ));
    }

    #[test]
    fn test_422_maps_to_validation_failed() {
        let body = json!({
            "errors": {
                "title": ["can't be blank"],
                "price": ["must be a number", "must be positive"]
            }
        });

        let error = ResourceError::from_rest_error(
            http_failure(422, &body, Some("req-456")),
            "Product",
            None,
        );

        assert_eq!(error.request_id(), Some("req-456"));
        assert_eq!(
            error.to_string(),
            "Validation failed: price must be a number, must be positive; title can't be blank"
        );
    }

    #[test]
    fn test_other_codes_stay_http_errors() {
        let error = ResourceError::from_rest_error(
            http_failure(500, &json!({"errors": "Internal error"}), Some("req-789")),
            "Product",
            None,
        );

        assert!(matches!(error, ResourceError::Rest(RestError::Http(_))));
        assert_eq!(error.request_id(), Some("req-789"));
    }

    #[test]
    fn test_non_http_errors_pass_through() {
        let error = ResourceError::from_rest_error(
            RestError::InvalidPath {
                path: String::new(),
            },
            "Product",
            None,
        );
        assert!(matches!(
            error,
            ResourceError::Rest(RestError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_parse_validation_errors_array_and_string_formats() {
        let errors = parse_validation_errors(&json!({"errors": ["Error 1", "Error 2"]}));
        assert_eq!(errors.get("base").map(Vec::len), Some(2));

        let errors = parse_validation_errors(&json!({"errors": "Title is too long"}));
        assert_eq!(
            errors.get("base"),
            Some(&vec!["Title is too long".to_string()])
        );

        assert!(parse_validation_errors(&json!({})).is_empty());
    }
}
