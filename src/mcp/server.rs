//! The MCP server loop.

use serde_json::{json, Value};

use crate::mcp::transport::McpTransport;
use crate::mcp::types::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, RpcId, ServerCapabilities, ServerInfo, ToolsCapability,
    PROTOCOL_VERSION,
};
use crate::mcp::McpError;
use crate::tools::ToolDispatcher;

/// Serves the catalog tools to one MCP client.
///
/// Requests are handled one at a time in arrival order.
#[derive(Debug)]
pub struct McpServer {
    dispatcher: ToolDispatcher,
    server_name: String,
    server_version: String,
    initialized: bool,
}

impl McpServer {
    /// Creates a server backed by `dispatcher`.
    #[must_use]
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher,
            server_name: env!("CARGO_PKG_NAME").to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            initialized: false,
        }
    }

    /// Serves requests until the transport closes.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Transport`] if reading or writing fails.
    pub async fn run<T: McpTransport + ?Sized>(&mut self, transport: &mut T) -> Result<(), McpError> {
        tracing::info!(server = %self.server_name, version = %self.server_version, "MCP server starting");

        while let Some(line) = transport.receive().await? {
            tracing::debug!(message = %line, "Received message");

            if let Some(response) = self.handle_message(&line).await {
                let json = serde_json::to_string(&response)?;
                tracing::debug!(response = %json, "Sending response");
                transport.send(&json).await?;
            }
        }

        tracing::info!("Transport closed, shutting down");
        Ok(())
    }

    /// Handles one raw message. Returns `None` for notifications.
    pub async fn handle_message(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let raw: Value = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse JSON");
                return Some(JsonRpcResponse::error(None, McpError::JsonParse(e).to_rpc_error()));
            }
        };

        if raw.get("id").is_none() {
            match serde_json::from_value::<JsonRpcNotification>(raw) {
                Ok(notification) => self.handle_notification(&notification),
                Err(e) => tracing::debug!(error = %e, "Ignoring malformed notification"),
            }
            return None;
        }

        let id = raw
            .get("id")
            .cloned()
            .and_then(|id| serde_json::from_value::<RpcId>(id).ok());

        match serde_json::from_value::<JsonRpcRequest>(raw) {
            Ok(request) => Some(self.handle_request(&request).await),
            Err(e) => {
                tracing::warn!(error = %e, "Invalid JSON-RPC request");
                Some(JsonRpcResponse::error(
                    id,
                    McpError::InvalidRequest(e.to_string()).to_rpc_error(),
                ))
            }
        }
    }

    /// Handles one request.
    pub async fn handle_request(&mut self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_list_tools(),
            "tools/call" => {
                if !self.initialized {
                    tracing::warn!("tools/call received before initialize");
                }
                self.handle_call_tool(request.params.as_ref()).await
            }
            method => {
                tracing::warn!(method = %method, "Unknown method");
                Err(McpError::MethodNotFound(method.to_string()))
            }
        };

        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(Some(id), error.to_rpc_error()),
        }
    }

    fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            "notifications/initialized" => tracing::info!("Client confirmed initialization"),
            method => tracing::debug!(method = %method, "Ignoring notification"),
        }
    }

    fn handle_initialize(&mut self) -> Result<Value, McpError> {
        tracing::info!("Handling initialize");
        self.initialized = true;

        Ok(serde_json::to_value(InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: self.server_name.clone(),
                version: Some(self.server_version.clone()),
            },
        })?)
    }

    fn handle_list_tools(&self) -> Result<Value, McpError> {
        Ok(serde_json::to_value(ListToolsResult {
            tools: self.dispatcher.list_tools(),
        })?)
    }

    async fn handle_call_tool(&self, params: Option<&Value>) -> Result<Value, McpError> {
        let params = params.ok_or_else(|| McpError::InvalidParams("missing params".to_string()))?;
        let params: CallToolParams = serde_json::from_value(params.clone())
            .map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let response = self.dispatcher.call(&params.name, params.arguments).await;
        Ok(serde_json::to_value(CallToolResult::from(response))?)
    }
}
