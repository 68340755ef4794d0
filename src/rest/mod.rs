//! REST resource layer on top of [`RestClient`](crate::clients::RestClient).
//!
//! - [`RestResource`]: `find`/`all`/`save`/`delete` for a resource type
//! - [`ResourceResponse<T>`]: decoded data plus cursor and call-limit metadata
//! - [`ResourceError`]: failures with 404 and 422 given a meaning
//! - [`resources`]: the [`Product`](resources::Product) resource and its
//!   embedded variants, options and images
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_mcp::rest::resources::Product;
//! use shopify_mcp::rest::RestResource;
//!
//! let response = Product::all(&client, None).await?;
//! for product in response.iter() {
//!     println!("- {:?}", product.title);
//! }
//! let (_, pagination) = response.into_parts();
//! if let Some(cursor) = pagination.next_page_info {
//!     // pass as `page_info` to fetch the next page
//! }
//! ```

mod errors;
mod resource;
pub mod resources;
mod response;

pub use errors::ResourceError;
pub use resource::RestResource;
pub use response::ResourceResponse;
