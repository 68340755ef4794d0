use std::process::ExitCode;

use shopify_mcp::catalog::RestConnector;
use shopify_mcp::mcp::{McpServer, StdioTransport};
use shopify_mcp::tools::ToolDispatcher;
use shopify_mcp::{ServerSettings, Transport};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries protocol frames in stdio mode.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shopify_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let settings = match ServerSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if settings.shopify_config().is_err() {
        tracing::warn!("Shopify credentials are incomplete; tool calls will fail until they are set");
    }

    let transport = settings.transport();
    let dispatcher = ToolDispatcher::new(RestConnector::new(settings));

    let result = match transport {
        Transport::Stdio => McpServer::new(dispatcher)
            .run(&mut StdioTransport::new())
            .await
            .map_err(|e| e.to_string()),
        Transport::Http(addr) => shopify_mcp::http::serve(addr, dispatcher)
            .await
            .map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Server stopped");
            ExitCode::FAILURE
        }
    }
}
