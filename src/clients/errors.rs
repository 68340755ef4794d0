//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: the shop answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: everything that can go wrong sending one request
//!
//! Requests are attempted exactly once, so there is no retry-exhaustion
//! variant; a 429 surfaces as an ordinary [`HttpResponseError`].

use thiserror::Error;

/// A non-successful response from the Admin API.
///
/// `message` holds the JSON error payload extracted from the response body
/// (`errors`, `error`, `error_description` and an `error_reference` pointing
/// at the `X-Request-Id`).
///
/// # Example
///
/// ```rust
/// use shopify_mcp::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Invalid API key or access token"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     r#"Shopify API returned 401: {"errors":"Invalid API key or access token"}"#
/// );
/// ```
#[derive(Debug, Error)]
#[error("Shopify API returned {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error payload.
    pub message: String,
    /// Reference ID for error reporting (from `X-Request-Id`).
    pub error_reference: Option<String>,
}

/// A request that failed validation before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for sending one HTTP request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
