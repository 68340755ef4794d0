//! MCP protocol errors.

use crate::mcp::types::{error_codes, JsonRpcError};

/// Errors raised while serving the MCP protocol.
///
/// Tool failures are not protocol errors; they travel inside a successful
/// `tools/call` result.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    /// A line was not valid JSON.
    #[error("Parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Valid JSON that is not a JSON-RPC request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport I/O failed.
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The method is not supported.
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// The method's parameters are missing or malformed.
    #[error("Invalid params: {0}")]
    InvalidParams(String),
}

impl McpError {
    /// Converts to a JSON-RPC error object.
    #[must_use]
    pub fn to_rpc_error(&self) -> JsonRpcError {
        let code = match self {
            Self::JsonParse(_) => error_codes::PARSE_ERROR,
            Self::InvalidRequest(_) => error_codes::INVALID_REQUEST,
            Self::MethodNotFound(_) => error_codes::METHOD_NOT_FOUND,
            Self::InvalidParams(_) => error_codes::INVALID_PARAMS,
            Self::Transport(_) => error_codes::INTERNAL_ERROR,
        };
        JsonRpcError {
            code,
            message: self.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(McpError::JsonParse(parse).to_rpc_error().code, -32700);
        assert_eq!(
            McpError::InvalidRequest("x".to_string()).to_rpc_error().code,
            -32600
        );
        let error = McpError::MethodNotFound("resources/list".to_string()).to_rpc_error();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Method not found: resources/list");
        assert_eq!(
            McpError::InvalidParams("missing params".to_string())
                .to_rpc_error()
                .code,
            -32602
        );
    }
}
