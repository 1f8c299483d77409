//! Immutable in-memory index over a loaded resource collection.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::{LoadError, Result};
use crate::library::related::KeywordMask;
use crate::types::{Resource, ResourceDocument};

/// One resource plus the lowercased text the queries scan.
#[derive(Debug, Clone)]
pub(crate) struct IndexedResource {
    pub resource: Resource,
    /// Space-joined searchable fields, lowercased.
    pub search_text: String,
    /// Related-ranking keywords present in title + question + content.
    pub keywords: KeywordMask,
}

impl IndexedResource {
    fn new(mut resource: Resource) -> Self {
        resource.refresh_tags();

        let search_text = join_lowered(&resource.searchable_fields());
        let relevance_text = join_lowered(&resource.relevance_fields());
        let keywords = KeywordMask::of(&relevance_text);

        Self {
            resource,
            search_text,
            keywords,
        }
    }
}

fn join_lowered(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A loaded, read-only resource collection in source order.
///
/// Every query is a pure function of the loaded state and returns views
/// into it. Absence (unknown id, no matches) is an empty result, never an
/// error.
#[derive(Debug, Clone, Default)]
pub struct ResourceLibrary {
    pub(crate) entries: Vec<IndexedResource>,
    ids: HashMap<String, usize>,
}

impl ResourceLibrary {
    /// A library with no resources (the fail-open state).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index resources in the given order, deriving tags.
    pub fn new(resources: Vec<Resource>) -> Self {
        let mut ids = HashMap::with_capacity(resources.len());
        let mut entries = Vec::with_capacity(resources.len());

        for (position, resource) in resources.into_iter().enumerate() {
            if ids.contains_key(&resource.id) {
                warn!(id = %resource.id, position, "Duplicate resource id, keeping first occurrence");
            } else {
                ids.insert(resource.id.clone(), position);
            }
            entries.push(IndexedResource::new(resource));
        }

        debug!(count = entries.len(), "Resource library indexed");
        Self { entries, ids }
    }

    pub fn from_document(document: ResourceDocument) -> Self {
        Self::new(document.resources)
    }

    /// Parse a `{ "resources": [...] }` document.
    pub fn from_slice(bytes: &[u8], origin: &str) -> Result<Self> {
        let document: ResourceDocument =
            serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self::from_document(document))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every resource, in load order.
    pub fn list_all(&self) -> Vec<&Resource> {
        self.resources().collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&Resource> {
        self.position(id).map(|i| &self.entries[i].resource)
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.ids.get(id).copied()
    }

    pub(crate) fn resources(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.entries.iter().map(|e| &e.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_preserves_order_and_derives_tags() {
        let json = r#"{"resources": [
            {"id": "b", "category": "Pensión"},
            {"id": "a", "category": "Laboral", "subcategory": "Contratos"}
        ]}"#
        .as_bytes();

        let library = ResourceLibrary::from_slice(json, "test").unwrap();
        let ids: Vec<_> = library.list_all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(library.by_id("a").unwrap().tags, vec!["Laboral", "Contratos"]);
        assert_eq!(library.by_id("b").unwrap().tags, vec!["Pensión"]);
    }

    #[test]
    fn test_from_slice_rejects_malformed_document() {
        let err = ResourceLibrary::from_slice(b"{not json", "bundle.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref origin, .. } if origin == "bundle.json"));

        let err = ResourceLibrary::from_slice(br#"{"items": []}"#, "bundle.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_by_id_unknown_is_none() {
        let library = ResourceLibrary::new(vec![Resource::new("a", "Laboral")]);
        assert!(library.by_id("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_resolves_to_first() {
        let library = ResourceLibrary::new(vec![
            Resource::new("dup", "Laboral"),
            Resource::new("dup", "Pensión"),
        ]);
        assert_eq!(library.len(), 2);
        assert_eq!(library.by_id("dup").unwrap().category, "Laboral");
    }

    #[test]
    fn test_search_text_skips_absent_fields() {
        let resource = Resource::new("a", "Laboral")
            .with_title("Contrato a Término Fijo")
            .with_content("Duración MÁXIMA de tres años");
        let indexed = IndexedResource::new(resource);
        assert_eq!(
            indexed.search_text,
            "contrato a término fijo laboral duración máxima de tres años"
        );
    }

    #[test]
    fn test_empty_library() {
        let library = ResourceLibrary::empty();
        assert!(library.is_empty());
        assert!(library.list_all().is_empty());
    }
}
