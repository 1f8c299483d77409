// Labor-Rights Resource Portal - API Core
//
// This crate exposes the resource relevance engine over HTTP: listing,
// category browsing, search and related-resource lookups for the public
// educational resource browser.

pub mod common;
pub mod config;
pub mod server;

pub use config::*;
