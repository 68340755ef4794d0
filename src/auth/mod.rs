//! Authentication against the Shopify Admin API.
//!
//! The server authenticates with a static Admin API access token (or a
//! private app password standing in for one). See [`Session`].

pub mod session;

pub use session::Session;
