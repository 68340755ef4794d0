//! Response wrapper for resource operations.
//!
//! [`ResourceResponse<T>`] pairs decoded resource data with the metadata
//! the catalog needs from the HTTP response: the next-page cursor and the
//! call-limit bucket. It implements `Deref<Target = T>`, so a
//! `ResourceResponse<Vec<Product>>` can be iterated and indexed directly.

use std::ops::Deref;

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};
use crate::rest::ResourceError;

/// Resource data plus response metadata.
///
/// # Example
///
/// ```rust
/// use shopify_mcp::clients::PaginationInfo;
/// use shopify_mcp::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2"],
///     PaginationInfo {
///         next_page_info: Some("eyJsYXN0X2lkIjo0fQ".to_string()),
///         ..PaginationInfo::default()
///     },
///     None,
/// );
///
/// assert_eq!(response.len(), 2);
/// let (items, pagination) = response.into_parts();
/// assert_eq!(items, ["item1", "item2"]);
/// assert_eq!(pagination.next_page_info.as_deref(), Some("eyJsYXN0X2lkIjo0fQ"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: PaginationInfo,
    rate_limit: Option<ApiCallLimit>,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: PaginationInfo,
        rate_limit: Option<ApiCallLimit>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns the call-limit bucket usage, if the header was present.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Splits the response into data and pagination.
    #[must_use]
    pub fn into_parts(self) -> (T, PaginationInfo) {
        (self.data, self.pagination)
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes `body[key]` of a successful HTTP response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedBody`] if the key is missing or its
    /// value does not deserialize into `T`.
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let HttpResponse {
            mut body,
            pagination,
            api_call_limit,
            ..
        } = response;

        let value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::UnexpectedBody {
                key: key.to_string(),
                message: "key missing from response body".to_string(),
            })?;

        let data = serde_json::from_value(value).map_err(|e| ResourceError::UnexpectedBody {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::new(data, pagination, api_call_limit))
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
