//! Query layer over a loaded collection.
//!
//! `ResourceLibrary` is built once and never mutated. Its methods are split
//! by concern:
//!
//! - [`index`] - construction, listing, id lookup
//! - [`category`] - category lookup and canonical coverage repair
//! - [`search`] - free-text search and combined filtering
//! - [`related`] - related-resource ranking

pub mod category;
pub mod index;
pub mod related;
pub mod search;

pub use index::ResourceLibrary;
pub use related::{CATEGORY_SCORE, KEYWORD_SCORE, RELATED_KEYWORDS, SUBCATEGORY_SCORE};
pub use search::tokenize;
