//! Source implementations for the resource document.
//!
//! # Available Sources
//!
//! - `FileSource` - Bundled JSON file on disk
//! - `HttpSource` - Static asset fetched over HTTP
//! - `StaticSource` - Bytes already in memory
//! - `MockSource` - For testing (see [`crate::testing`])

mod file;
mod http;
mod memory;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::StaticSource;

// Re-export from traits for convenience
pub use crate::traits::ResourceSource;
