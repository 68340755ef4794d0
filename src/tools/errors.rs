//! Tool-level error types.
//!
//! [`ToolError`] is everything that can go wrong between receiving a tool
//! call and producing its output. The dispatcher renders it as a single text
//! item, so its `Display` output is what the MCP client sees.

use thiserror::Error;

use crate::catalog::ConnectError;
use crate::error::ConfigError;
use crate::rest::ResourceError;

/// Error type for tool calls.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument is missing or an argument is malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// The tool name is not one of the catalog tools.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The Shopify settings cannot be turned into a session.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Admin API call failed.
    #[error(transparent)]
    Remote(#[from] ResourceError),

    /// The tool output could not be encoded.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<ConnectError> for ToolError {
    fn from(error: ConnectError) -> Self {
        match error {
            ConnectError::Config(error) => Self::Config(error),
            ConnectError::Client(error) => Self::Remote(ResourceError::Rest(error)),
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ToolError>();
};
