//! REST-specific error types.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use shopify_mcp::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_error_includes_path() {
        let error = RestError::InvalidPath {
            path: "/.json".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: '/.json'");
    }

    #[test]
    fn test_http_errors_pass_through_unchanged() {
        let error: RestError = HttpError::Response(HttpResponseError {
            code: 401,
            message: r#"{"errors":"[API] Invalid API key or access token"}"#.to_string(),
            error_reference: None,
        })
        .into();
        assert_eq!(
            error.to_string(),
            r#"Shopify API returned 401: {"errors":"[API] Invalid API key or access token"}"#
        );
    }
}
