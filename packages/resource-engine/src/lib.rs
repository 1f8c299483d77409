//! Labor-Rights Resource Relevance Engine
//!
//! Loads a fixed collection of educational documents once and answers
//! listing, category, search and "related resources" queries over it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use resource_engine::{FileSource, ResourceEngine};
//!
//! let engine = ResourceEngine::new(FileSource::new("data/resources.json"));
//! engine.load().await?;
//!
//! let hits = engine.search("despido indemnización").await;
//! let buckets = engine.ensure_all_categories().await;
//! let related = engine.related("despido-sin-justa-causa", 3).await;
//! ```
//!
//! # Modules
//!
//! - [`types`] - Resource record and canonical categories
//! - [`traits`] - `ResourceSource` abstraction
//! - [`sources`] - File, HTTP and in-memory sources
//! - [`library`] - Immutable index and the query logic
//! - [`engine`] - Single-flight async loading facade
//! - [`testing`] - Mock source and sample data

pub mod engine;
pub mod error;
pub mod library;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use engine::ResourceEngine;
pub use error::{LoadError, SourceError};
pub use library::{tokenize, ResourceLibrary, RELATED_KEYWORDS};
pub use sources::{FileSource, HttpSource, StaticSource};
pub use traits::ResourceSource;
pub use types::{CanonicalCategory, Resource, ResourceDocument};
