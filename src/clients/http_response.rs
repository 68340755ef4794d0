//! Parsed Admin API responses.
//!
//! Besides status, headers and body, [`HttpResponse`] decodes the two
//! Shopify headers the catalog cares about: `Link` (cursor pagination) and
//! `X-Shopify-Shop-Api-Call-Limit` (leaky-bucket usage).

use std::collections::HashMap;

/// Rate limit usage from `X-Shopify-Shop-Api-Call-Limit` (`"used/size"`).
///
/// # Example
///
/// ```rust
/// use shopify_mcp::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("39/40").unwrap();
/// assert_eq!(limit.request_count, 39);
/// assert_eq!(limit.remaining(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently in the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses an `"X/Y"` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: used.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Cursor links parsed from a `Link` header.
///
/// The header is a comma-separated list of `<url>; rel="value"` entries.
/// An entry that does not split into exactly two `;`-separated segments is
/// skipped. An entry is the next page when its second segment contains
/// `rel="next"` (and the previous page for `rel="previous"`). The cursor
/// is the URL-decoded `page_info` query parameter of that entry's URL.
///
/// # Example
///
/// ```rust
/// use shopify_mcp::clients::PaginationInfo;
///
/// let info = PaginationInfo::parse_link_header(
///     r#"<https://x/y?page_info=ABC>; rel="next", <https://x/y?page_info=ZZZ>; rel="previous""#,
/// );
/// assert_eq!(info.next_page_info.as_deref(), Some("ABC"));
/// assert_eq!(info.prev_page_info.as_deref(), Some("ZZZ"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// URL of the next page, if linked.
    pub next_page_url: Option<String>,
    /// Cursor for the next page.
    pub next_page_info: Option<String>,
    /// Cursor for the previous page.
    pub prev_page_info: Option<String>,
}

impl PaginationInfo {
    const NEXT: &'static str = r#"rel="next""#;
    const PREVIOUS: &'static str = r#"rel="previous""#;

    /// Parses a `Link` header value. Malformed entries are ignored.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for entry in header_value.split(',') {
            let segments: Vec<&str> = entry.split(';').collect();
            let [url, rel] = segments.as_slice() else {
                continue;
            };

            let url = url.trim().trim_start_matches('<').trim_end_matches('>');
            let rel = rel.trim();

            if rel.contains(Self::NEXT) {
                if result.next_page_url.is_none() {
                    result.next_page_url = Some(url.to_string());
                    result.next_page_info = extract_page_info(url);
                }
            } else if rel.contains(Self::PREVIOUS) && result.prev_page_info.is_none() {
                result.prev_page_info = extract_page_info(url);
            }
        }

        result
    }
}

/// Pulls the URL-decoded `page_info` value out of a URL's query string.
///
/// Returns `None` when the URL has no query, no `page_info`, or an empty one.
#[must_use]
pub fn extract_page_info(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);

    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != "page_info" || value.is_empty() {
            return None;
        }
        let value = value.replace('+', " ");
        Some(urlencoding::decode(&value).map_or(value.clone(), |decoded| decoded.into_owned()))
    })
}

/// A response from the Admin API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercase names, possibly repeated.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body (`{}` when empty).
    pub body: serde_json::Value,
    /// Links from the `Link` header.
    pub pagination: PaginationInfo,
    /// Bucket usage from `X-Shopify-Shop-Api-Call-Limit`.
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Creates a response, decoding the `Link` and call-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let pagination = headers
            .get("link")
            .map(|values| PaginationInfo::parse_link_header(&values.join(", ")))
            .unwrap_or_default();

        let api_call_limit = headers
            .get("x-shopify-shop-api-call-limit")
            .and_then(|values| values.first())
            .and_then(|value| ApiCallLimit::parse(value));

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
