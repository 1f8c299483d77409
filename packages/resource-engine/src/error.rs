//! Typed errors for the resource engine.
//!
//! Only loading can fail. Queries over a loaded library are total.

use thiserror::Error;

/// Errors raised while fetching the raw collection bytes.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Local read failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },
}

/// Errors that can occur while loading a resource collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("failed to read resources from {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: SourceError,
    },

    /// The bytes were not a valid `{ "resources": [...] }` document
    #[error("malformed resource document from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for source reads.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;
