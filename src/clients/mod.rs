//! HTTP plumbing for the Shopify Admin API.
//!
//! - [`HttpClient`]: authenticated async client for one shop
//! - [`HttpRequest`] / [`HttpMethod`]: outgoing requests
//! - [`HttpResponse`]: parsed responses, with [`PaginationInfo`] from the
//!   `Link` header and [`ApiCallLimit`] from the call-limit header
//! - [`rest::RestClient`]: path-normalizing REST client on top of it
//!
//! There is no retry logic anywhere in this layer: every request is sent
//! once and any failure is returned to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, REQUEST_TIMEOUT, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{extract_page_info, ApiCallLimit, HttpResponse, PaginationInfo};

pub use rest::{RestClient, RestError};
