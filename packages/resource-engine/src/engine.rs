//! Async facade that loads the collection once and serves queries.
//!
//! The first caller to touch the engine triggers the load; concurrent
//! callers wait on the same in-flight load instead of fetching again. A
//! failed load is logged, reported to the caller that ran it, and leaves
//! an empty library behind so every later query answers "no resources".

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::error::{LoadError, Result};
use crate::library::ResourceLibrary;
use crate::traits::ResourceSource;
use crate::types::{CanonicalCategory, Resource};

/// Resource relevance engine over an injected source.
///
/// # Example
///
/// ```rust,ignore
/// use resource_engine::{FileSource, ResourceEngine};
///
/// let engine = ResourceEngine::new(FileSource::new("data/resources.json"));
/// if let Err(e) = engine.load().await {
///     // already logged; queries now return empty results
/// }
/// let hits = engine.search("despido").await;
/// ```
pub struct ResourceEngine {
    source: Arc<dyn ResourceSource>,
    library: OnceCell<ResourceLibrary>,
}

impl ResourceEngine {
    pub fn new(source: impl ResourceSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            library: OnceCell::new(),
        }
    }

    /// Engine over an already-built library; no source is ever read.
    pub fn from_library(library: ResourceLibrary) -> Self {
        Self {
            source: Arc::new(crate::sources::StaticSource::new(Vec::new()).named("preloaded")),
            library: OnceCell::new_with(Some(library)),
        }
    }

    /// Load the collection if it has not been loaded yet.
    ///
    /// Returns the error only to the call that performed a failing load.
    pub async fn load(&self) -> Result<&ResourceLibrary> {
        match self.resolve().await {
            (library, None) => Ok(library),
            (_, Some(err)) => Err(err),
        }
    }

    /// The loaded library, empty if loading failed.
    pub async fn library(&self) -> &ResourceLibrary {
        self.resolve().await.0
    }

    /// Whether a load has completed (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.library.initialized()
    }

    pub fn origin(&self) -> String {
        self.source.describe()
    }

    async fn resolve(&self) -> (&ResourceLibrary, Option<LoadError>) {
        let mut failure = None;
        let slot = &mut failure;

        let library = self
            .library
            .get_or_init(|| async move {
                match self.read_library().await {
                    Ok(library) => library,
                    Err(err) => {
                        error!(error = %err, "Failed to load resources, serving an empty collection");
                        *slot = Some(err);
                        ResourceLibrary::empty()
                    }
                }
            })
            .await;

        (library, failure)
    }

    async fn read_library(&self) -> Result<ResourceLibrary> {
        let origin = self.source.describe();
        let bytes = self
            .source
            .fetch()
            .await
            .map_err(|source| LoadError::Read {
                origin: origin.clone(),
                source,
            })?;

        let library = ResourceLibrary::from_slice(&bytes, &origin)?;
        info!(origin = %origin, count = library.len(), "Resources loaded");
        Ok(library)
    }

    // =========================================================================
    // Owned query facade
    // =========================================================================

    pub async fn list_all(&self) -> Vec<Resource> {
        cloned(self.library().await.list_all())
    }

    pub async fn by_id(&self, id: &str) -> Option<Resource> {
        self.library().await.by_id(id).cloned()
    }

    pub async fn by_category(&self, category: &str) -> Vec<Resource> {
        cloned(self.library().await.by_category(category))
    }

    pub async fn ensure_all_categories(&self) -> IndexMap<CanonicalCategory, Vec<Resource>> {
        self.library()
            .await
            .ensure_all_categories()
            .into_iter()
            .map(|(category, resources)| (category, cloned(resources)))
            .collect()
    }

    pub async fn search(&self, query: &str) -> Vec<Resource> {
        cloned(self.library().await.search(query))
    }

    pub async fn related(&self, id: &str, count: usize) -> Vec<Resource> {
        cloned(self.library().await.related(id, count))
    }

    pub async fn filter(&self, category: Option<&str>, query: Option<&str>) -> Vec<Resource> {
        cloned(self.library().await.filter(category, query))
    }
}

fn cloned(resources: Vec<&Resource>) -> Vec<Resource> {
    resources.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSource;

    const DOCUMENT: &str = r#"{"resources": [
        {"id": "a", "category": "Laboral", "subcategory": "Contratos"},
        {"id": "b", "category": "Laboral", "subcategory": "Contratos"},
        {"id": "c", "category": "Pensión"}
    ]}"#;

    #[tokio::test]
    async fn test_load_then_query() {
        let engine = ResourceEngine::new(MockSource::with_json(DOCUMENT));
        assert!(!engine.is_loaded());

        let library = engine.load().await.unwrap();
        assert_eq!(library.len(), 3);
        assert!(engine.is_loaded());

        let related: Vec<_> = engine.related("a", 2).await.into_iter().map(|r| r.id).collect();
        assert_eq!(related, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_queries_trigger_lazy_load_once() {
        let source = MockSource::with_json(DOCUMENT);
        let engine = ResourceEngine::new(source.clone());

        assert_eq!(engine.search("").await.len(), 3);
        assert_eq!(engine.by_category("Pensión").await.len(), 1);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_reports_once_and_degrades_to_empty() {
        let source = MockSource::failing();
        let engine = ResourceEngine::new(source.clone());

        let err = engine.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));

        // Later calls see the empty library, not the error
        assert!(engine.load().await.unwrap().is_empty());
        assert!(engine.list_all().await.is_empty());
        assert!(engine.by_id("a").await.is_none());
        assert_eq!(engine.ensure_all_categories().await.len(), 6);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_document_is_parse_error() {
        let engine = ResourceEngine::new(MockSource::with_json("{\"resources\": 42}"));
        let err = engine.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(engine.search("").await.is_empty());
    }

    #[tokio::test]
    async fn test_from_library_skips_source() {
        let engine = ResourceEngine::from_library(ResourceLibrary::new(vec![Resource::new("x", "Laboral")]));
        assert!(engine.is_loaded());
        assert_eq!(engine.by_id("x").await.unwrap().category, "Laboral");
        assert_eq!(engine.origin(), "preloaded");
    }
}
