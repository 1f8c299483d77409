//! ResourceSource trait for pluggable collection storage.
//!
//! The engine only needs "fetch bytes"; where they come from (a bundled
//! file, a static asset over HTTP, memory) is the source's business.

use async_trait::async_trait;

use crate::error::SourceResult;

/// Raw bytes of a resource document, fetched once per engine.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Read the whole document.
    async fn fetch(&self) -> SourceResult<Vec<u8>>;

    /// Human-readable origin for logs and errors (path, URL, ...).
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: ResourceSource + ?Sized> ResourceSource for Box<T> {
    async fn fetch(&self) -> SourceResult<Vec<u8>> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
