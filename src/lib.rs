//! # Shopify MCP
//!
//! A Model Context Protocol server that exposes a Shopify store's product
//! catalog as five tools: `list_products`, `get_product`, `create_product`,
//! `update_product` and `delete_product`.
//!
//! ## Overview
//!
//! - [`config`]: validated [`ShopifyConfig`] and environment-driven
//!   [`ServerSettings`]
//! - [`auth`]: per-call [`Session`]s
//! - [`clients`]: HTTP and REST clients for the Admin API, with `Link`
//!   header pagination
//! - [`rest`]: the [`rest::RestResource`] trait and the product resources
//! - [`catalog`]: the [`catalog::ProductCatalog`] seam and the page walker
//! - [`tools`]: tool schemas, argument validation, update reconciliation and
//!   the [`tools::ToolDispatcher`]
//! - [`mcp`]: JSON-RPC 2.0 over stdio
//! - [`http`]: the same tools as a small JSON API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopify_mcp::catalog::RestConnector;
//! use shopify_mcp::mcp::{McpServer, StdioTransport};
//! use shopify_mcp::tools::ToolDispatcher;
//! use shopify_mcp::ServerSettings;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ServerSettings::from_env()?;
//! let dispatcher = ToolDispatcher::new(RestConnector::new(settings));
//!
//! McpServer::new(dispatcher)
//!     .run(&mut StdioTransport::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: settings are read once and passed explicitly
//! - **Session per call**: credentials are validated when a tool runs, so a
//!   misconfigured server still starts and explains what is missing
//! - **One attempt**: remote calls are never retried
//! - **Errors as output**: a failed tool call is a result, never a transport
//!   fault

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod rest;
pub mod tools;

pub use auth::Session;
pub use config::{
    AccessToken, ApiVersion, HostUrl, ServerSettings, ShopDomain, ShopifyConfig,
    ShopifyConfigBuilder, Transport,
};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, PaginationInfo, RestClient,
};
