//! HTTP transport.
//!
//! A small JSON API for hosted deployments:
//!
//! | Route | Body | Response |
//! |---|---|---|
//! | `GET /` | | server name, version and description |
//! | `POST /mcp/list_tools` | ignored | `{"tools": [...]}` |
//! | `POST /mcp/call_tool` | `{"name", "arguments"}` | `{"result": [...]}` |
//!
//! Tool failures are part of a `200` result, just like over stdio. Only a
//! request the server cannot read gets a `400` with `{"error": "..."}`.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::mcp::types::ListToolsResult;
use crate::tools::{ToolContent, ToolDispatcher};

#[derive(Debug, Deserialize)]
struct CallToolBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Serialize)]
struct CallToolReply {
    result: Vec<ToolContent>,
}

#[derive(Debug, Serialize)]
struct ServerDescription {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn bad_request(error: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Builds the router with request tracing.
pub fn router(dispatcher: ToolDispatcher) -> Router {
    Router::new()
        .route("/", get(describe))
        .route("/mcp/list_tools", post(list_tools))
        .route("/mcp/call_tool", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

/// Serves the router on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(addr: SocketAddr, dispatcher: ToolDispatcher) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router(dispatcher))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("HTTP server shutting down");
        })
        .await
}

async fn describe() -> Json<ServerDescription> {
    Json(ServerDescription {
        name: "Shopify MCP Server",
        version: env!("CARGO_PKG_VERSION"),
        description: "An MCP server that integrates with the Shopify API",
    })
}

async fn list_tools(State(dispatcher): State<ToolDispatcher>) -> Json<ListToolsResult> {
    Json(ListToolsResult {
        tools: dispatcher.list_tools(),
    })
}

async fn call_tool(State(dispatcher): State<ToolDispatcher>, body: Bytes) -> Response {
    let body: CallToolBody = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected call_tool body");
            return bad_request(format!("Invalid JSON body: {e}"));
        }
    };

    let Some(name) = body.name.filter(|name| !name.is_empty()) else {
        return bad_request("Tool name is required");
    };

    let response = dispatcher.call(&name, body.arguments).await;
    Json(CallToolReply {
        result: response.content,
    })
    .into_response()
}
