//! The product catalog tools.
//!
//! Five tools are exposed: `list_products`, `get_product`, `create_product`,
//! `update_product` and `delete_product`. This module owns everything between
//! a raw `{name, arguments}` call and its text output:
//!
//! - [`schema`]: tool names, descriptions and input schemas
//! - [`args`] and [`request`]: argument decoding and validation
//! - [`mapper`]: arguments to products, products to output
//! - [`reconcile`]: merging sub-resource records into a fetched product
//! - [`ToolDispatcher`]: runs a call against a catalog
//!
//! # Example
//!
//! ```rust
//! use shopify_mcp::tools::{ToolName, ToolRequest};
//! use serde_json::json;
//!
//! let request = ToolRequest::parse("get_product", json!({"product_id": "632910392"})).unwrap();
//! assert_eq!(request.tool(), ToolName::GetProduct);
//! ```

pub mod args;
mod dispatcher;
mod errors;
pub mod mapper;
pub mod reconcile;
pub mod request;
pub mod schema;

pub use dispatcher::{ToolContent, ToolDispatcher, ToolResponse};
pub use errors::ToolError;
pub use request::{NewProduct, ProductUpdate, ToolRequest, DEFAULT_LIST_LIMIT};
pub use schema::{tool_definitions, ToolDefinition, ToolName};
