//! Category lookup and canonical coverage repair.

use indexmap::IndexMap;
use tracing::debug;

use crate::library::ResourceLibrary;
use crate::types::{CanonicalCategory, Resource};

/// Encoding-tolerant fragment of "Trámites" / "Tramites" / "TrÃ¡mites".
const TRAMITES_FRAGMENT: &str = "mite";
const DERECHOS_FRAGMENT: &str = "Derecho";

/// Case-insensitive containment in either direction. Empty strings never match.
fn overlaps(a: &str, b: &str) -> bool {
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

pub(crate) fn matches_category(resource: &Resource, query: &str) -> bool {
    if resource.category == query || overlaps(query, &resource.category) {
        return true;
    }

    if query == CanonicalCategory::TramitesLaborales.label() {
        let in_subcategory = resource
            .subcategory
            .as_deref()
            .is_some_and(|s| s.contains(TRAMITES_FRAGMENT));
        if resource.category.contains(TRAMITES_FRAGMENT) || in_subcategory {
            return true;
        }
    }

    query == CanonicalCategory::Derechos.label() && resource.category.contains(DERECHOS_FRAGMENT)
}

impl ResourceLibrary {
    /// Resources whose category matches `category`, in load order.
    ///
    /// Matching: exact label, then case-insensitive containment either way,
    /// then the "Trámites laborales" / "Derechos" compatibility rules.
    pub fn by_category(&self, category: &str) -> Vec<&Resource> {
        let matched: Vec<&Resource> = self
            .resources()
            .filter(|r| matches_category(r, category))
            .collect();

        debug!(category = %category, matched = matched.len(), "Category lookup");
        matched
    }

    /// Place every resource in exactly one of the six canonical buckets.
    ///
    /// Passes, first assignment wins:
    /// 1. exact label
    /// 2. for buckets still empty, containment against category or subcategory
    /// 3. content keywords for whatever is left, defaulting to Laboral
    pub fn ensure_all_categories(&self) -> IndexMap<CanonicalCategory, Vec<&Resource>> {
        let mut assigned: Vec<Option<CanonicalCategory>> = self
            .resources()
            .map(|r| CanonicalCategory::from_label(&r.category))
            .collect();

        for canonical in CanonicalCategory::ALL {
            if assigned.contains(&Some(canonical)) {
                continue;
            }
            for (slot, resource) in assigned.iter_mut().zip(self.resources()) {
                if slot.is_some() {
                    continue;
                }
                let label = canonical.label();
                let by_subcategory = resource
                    .subcategory
                    .as_deref()
                    .is_some_and(|s| overlaps(label, s));
                if overlaps(label, &resource.category) || by_subcategory {
                    *slot = Some(canonical);
                }
            }
        }

        for (slot, resource) in assigned.iter_mut().zip(self.resources()) {
            if slot.is_none() {
                let content = resource.content.as_deref().unwrap_or_default().to_lowercase();
                *slot = Some(CanonicalCategory::classify_content(&content));
            }
        }

        let mut buckets: IndexMap<CanonicalCategory, Vec<&Resource>> = CanonicalCategory::ALL
            .into_iter()
            .map(|c| (c, Vec::new()))
            .collect();

        for (slot, resource) in assigned.into_iter().zip(self.resources()) {
            let bucket = slot.unwrap_or(CanonicalCategory::FALLBACK);
            buckets.entry(bucket).or_default().push(resource);
        }

        buckets
    }
}
