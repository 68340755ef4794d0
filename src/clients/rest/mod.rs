//! REST Admin API client.
//!
//! - [`RestClient`]: `get`/`post`/`put`/`delete` against `/admin/api/{version}`
//! - [`RestError`]: error type for REST operations

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
