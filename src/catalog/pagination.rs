//! Cursor-driven bulk retrieval.
//!
//! [`PageWalker`] keeps requesting pages from a [`PageSource`] until it has
//! `total_limit` items, the listing runs dry, or a request fails. Pages are
//! spaced by a fixed pacing interval to stay inside Shopify's call-limit
//! bucket.
//!
//! A failed request does not fail the walk. The items gathered so far are
//! returned and the failure is recorded in [`StopReason::Failed`] and logged.

use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{Page, ProductCatalog};
use crate::rest::resources::Product;
use crate::rest::ResourceError;

/// Largest page Shopify serves.
pub const MAX_PAGE_SIZE: u32 = 250;

/// Delay between consecutive page requests.
pub const PAGE_PACING: Duration = Duration::from_millis(500);

/// A cursor-paginated listing.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// The listed item type.
    type Item: Send;

    /// Fetches at most `limit` items starting at `cursor` (or the first page).
    async fn fetch_page(
        &self,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Page<Self::Item>, ResourceError>;
}

#[async_trait]
impl<C> PageSource for C
where
    C: ProductCatalog + ?Sized,
{
    type Item = Product;

    async fn fetch_page(
        &self,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Page<Product>, ResourceError> {
        self.list_page(limit, cursor).await
    }
}

/// Why a walk ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// `total_limit` items were collected.
    LimitReached,
    /// The listing had no further pages.
    Exhausted,
    /// A page request failed; the walk returned what it had.
    Failed(String),
}

/// The items gathered by a walk and why it stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkOutcome<T> {
    /// Collected items, never more than the requested total.
    pub items: Vec<T>,
    /// Why the walk ended.
    pub stop: StopReason,
}

impl<T> WalkOutcome<T> {
    /// Returns `true` if a failure cut the listing short.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self.stop, StopReason::Failed(_))
    }
}

/// Walks a paginated listing page by page.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_mcp::catalog::PageWalker;
///
/// let outcome = PageWalker::default().walk(catalog.as_ref(), Some(100)).await;
/// println!("{} products ({:?})", outcome.items.len(), outcome.stop);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWalker {
    per_page_limit: u32,
    pacing: Duration,
}

impl Default for PageWalker {
    fn default() -> Self {
        Self::new(MAX_PAGE_SIZE)
    }
}

impl PageWalker {
    /// Creates a walker requesting up to `per_page_limit` items per page,
    /// clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(per_page_limit: u32) -> Self {
        Self {
            per_page_limit: per_page_limit.clamp(1, MAX_PAGE_SIZE),
            pacing: PAGE_PACING,
        }
    }

    /// Replaces the delay between page requests.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Collects up to `total_limit` items (all of them when `None`).
    pub async fn walk<S>(&self, source: &S, total_limit: Option<usize>) -> WalkOutcome<S::Item>
    where
        S: PageSource + ?Sized,
    {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;

        let stop = loop {
            let quota = total_limit.map(|total| total.saturating_sub(items.len()));
            if quota == Some(0) {
                break StopReason::LimitReached;
            }

            let page_size = quota.map_or(self.per_page_limit, |quota| {
                u32::try_from(quota).map_or(self.per_page_limit, |q| q.min(self.per_page_limit))
            });

            if cursor.is_some() {
                tokio::time::sleep(self.pacing).await;
            }

            let page = match source.fetch_page(page_size, cursor.as_deref()).await {
                Ok(page) => page,
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        collected = items.len(),
                        "Page request failed; returning partial listing"
                    );
                    break StopReason::Failed(error.to_string());
                }
            };

            tracing::debug!(
                page_size,
                received = page.items.len(),
                has_next = page.next_cursor.is_some(),
                "Fetched page"
            );

            if page.items.is_empty() {
                break StopReason::Exhausted;
            }
            items.extend(page.items);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break StopReason::Exhausted,
            }
        };

        if let Some(total) = total_limit {
            items.truncate(total);
        }

        WalkOutcome { items, stop }
    }
}
