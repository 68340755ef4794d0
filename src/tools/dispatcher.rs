//! Tool dispatch.
//!
//! [`ToolDispatcher`] is the single entry point both transports call. A call
//! moves through three phases: its arguments are validated into a
//! [`ToolRequest`], a catalog session is opened, and the request is executed
//! against it. A failure in any phase ends the call with one text item of the
//! form `An error occurred: {message}`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{CatalogConnector, PageWalker, ProductCatalog};
use crate::tools::mapper::{
    new_product, DeleteResult, MutationResult, ProductDetail, ProductSummary,
};
use crate::tools::reconcile::apply_update;
use crate::tools::request::ToolRequest;
use crate::tools::schema::{tool_definitions, ToolDefinition};
use crate::tools::ToolError;

/// One item of tool output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    /// Plain text; successful calls carry pretty-printed JSON.
    Text {
        /// The text.
        text: String,
    },
}

impl ToolContent {
    /// Creates a text item.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Returns the text of this item.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// The output of one tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolResponse {
    /// Output items, in order.
    pub content: Vec<ToolContent>,
    /// Whether the call failed.
    pub is_error: bool,
}

impl ToolResponse {
    fn success(text: String) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: false,
        }
    }

    fn failure(error: &ToolError) -> Self {
        Self {
            content: vec![ToolContent::text(format!("An error occurred: {error}"))],
            is_error: true,
        }
    }
}

/// Routes tool calls to the product catalog.
///
/// Cloning is cheap; clones share the connector.
///
/// # Example
///
/// ```rust,no_run
/// use serde_json::json;
/// use shopify_mcp::catalog::RestConnector;
/// use shopify_mcp::tools::ToolDispatcher;
/// use shopify_mcp::ServerSettings;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ServerSettings::from_env()?;
/// let dispatcher = ToolDispatcher::new(RestConnector::new(settings));
///
/// let response = dispatcher.call("list_products", json!({"limit": 5})).await;
/// println!("{}", response.content[0].as_text());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ToolDispatcher {
    connector: Arc<dyn CatalogConnector>,
    walker: PageWalker,
}

impl std::fmt::Debug for ToolDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDispatcher")
            .field("walker", &self.walker)
            .finish_non_exhaustive()
    }
}

impl ToolDispatcher {
    /// Creates a dispatcher that opens catalogs through `connector`.
    #[must_use]
    pub fn new(connector: impl CatalogConnector + 'static) -> Self {
        Self {
            connector: Arc::new(connector),
            walker: PageWalker::default(),
        }
    }

    /// Replaces the walker used by `list_products`.
    #[must_use]
    pub const fn with_walker(mut self, walker: PageWalker) -> Self {
        self.walker = walker;
        self
    }

    /// Returns the descriptors of every tool.
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        tool_definitions()
    }

    /// Runs one tool call. Never fails; errors become an error response.
    pub async fn call(&self, name: &str, arguments: Value) -> ToolResponse {
        tracing::info!(tool = %name, "Tool call");

        match self.execute(name, arguments).await {
            Ok(text) => ToolResponse::success(text),
            Err(error) => {
                let request_id = match &error {
                    ToolError::Remote(remote) => remote.request_id(),
                    _ => None,
                };
                tracing::warn!(tool = %name, error = %error, request_id, "Tool call failed");
                ToolResponse::failure(&error)
            }
        }
    }

    async fn execute(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        let request = ToolRequest::parse(name, arguments)?;
        tracing::debug!(tool = request.tool().as_str(), "Arguments validated");
        let catalog = self.connector.connect()?;
        self.run(catalog.as_ref(), request).await
    }

    /// Executes a validated request and returns its JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Remote`] when a catalog call fails. A failure
    /// while listing is not an error; the products gathered so far are
    /// returned.
    pub async fn run(
        &self,
        catalog: &dyn ProductCatalog,
        request: ToolRequest,
    ) -> Result<String, ToolError> {
        match request {
            ToolRequest::ListProducts { limit } => {
                let outcome = self.walker.walk(catalog, Some(limit)).await;
                tracing::debug!(
                    returned = outcome.items.len(),
                    truncated = outcome.is_truncated(),
                    stop = ?outcome.stop,
                    "Listing finished"
                );
                let summaries: Vec<ProductSummary> =
                    outcome.items.iter().map(ProductSummary::from).collect();
                render(&summaries)
            }
            ToolRequest::GetProduct { product_id } => {
                let product = catalog.find(product_id).await?;
                render(&ProductDetail::from(&product))
            }
            ToolRequest::CreateProduct(request) => {
                let saved = catalog.create(&new_product(&request)).await?;
                render(&MutationResult::new(&saved, "created"))
            }
            ToolRequest::UpdateProduct(update) => {
                let mut product = catalog.find(update.product_id).await?;
                let report = apply_update(&mut product, &update);
                tracing::debug!(product_id = update.product_id, ?report, "Merged update");
                let saved = catalog.update(&product).await?;
                render(&MutationResult::new(&saved, "updated"))
            }
            ToolRequest::DeleteProduct { product_id } => {
                let product = catalog.find(product_id).await?;
                catalog.delete(product_id).await?;
                render(&DeleteResult::new(product.title.as_deref()))
            }
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}
