//! Model Context Protocol over newline-delimited JSON-RPC 2.0.
//!
//! [`McpServer`] reads requests from an [`McpTransport`] and answers
//! `initialize`, `ping`, `tools/list` and `tools/call`. The binary uses
//! [`StdioTransport`]; [`ChannelTransport`] connects a client in-process.

mod error;
mod server;
mod transport;
pub mod types;

pub use error::McpError;
pub use server::McpServer;
pub use transport::{ChannelTransport, McpTransport, StdioTransport};
