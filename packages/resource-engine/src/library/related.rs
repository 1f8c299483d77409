//! Related-resource ranking.
//!
//! Score per candidate:
//!
//! | signal                                   | points |
//! |------------------------------------------|--------|
//! | same category (exact)                    | 5      |
//! | same non-empty subcategory               | 3      |
//! | each shared topic keyword                | 1      |
//!
//! Ties keep load order.

use tracing::debug;

use crate::library::ResourceLibrary;
use crate::types::Resource;

pub const CATEGORY_SCORE: u32 = 5;
pub const SUBCATEGORY_SCORE: u32 = 3;
pub const KEYWORD_SCORE: u32 = 1;

/// Topic keywords compared between the source and each candidate.
pub const RELATED_KEYWORDS: [&str; 10] = [
    "derecho",
    "trabajo",
    "laboral",
    "contrato",
    "despido",
    "salud",
    "pensión",
    "indemnización",
    "liquidación",
    "prestaciones",
];

/// Bit `i` set when `RELATED_KEYWORDS[i]` occurs in the relevance text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct KeywordMask(u16);

impl KeywordMask {
    /// Build from already-lowercased text.
    pub fn of(lowered: &str) -> Self {
        let bits = RELATED_KEYWORDS
            .iter()
            .enumerate()
            .filter(|(_, keyword)| lowered.contains(*keyword))
            .fold(0u16, |bits, (i, _)| bits | (1 << i));
        Self(bits)
    }

    pub fn shared(self, other: Self) -> u32 {
        (self.0 & other.0).count_ones()
    }
}

fn score(
    source: &Resource,
    source_keywords: KeywordMask,
    candidate: &Resource,
    candidate_keywords: KeywordMask,
) -> u32 {
    let mut score = 0;

    if candidate.category == source.category {
        score += CATEGORY_SCORE;
    }

    if let (Some(a), Some(b)) = (source.subcategory.as_deref(), candidate.subcategory.as_deref()) {
        if !a.is_empty() && a == b {
            score += SUBCATEGORY_SCORE;
        }
    }

    score + KEYWORD_SCORE * source_keywords.shared(candidate_keywords)
}

impl ResourceLibrary {
    /// Up to `count` resources most related to `id`, best first.
    ///
    /// Unknown ids yield an empty list. The resource itself is never included.
    pub fn related(&self, id: &str, count: usize) -> Vec<&Resource> {
        let Some(position) = self.position(id) else {
            debug!(id = %id, "Related lookup for unknown resource");
            return Vec::new();
        };
        let source = &self.entries[position];

        let mut scored: Vec<(u32, &Resource)> = self
            .entries
            .iter()
            .filter(|candidate| candidate.resource.id != source.resource.id)
            .map(|candidate| {
                let points = score(
                    &source.resource,
                    source.keywords,
                    &candidate.resource,
                    candidate.keywords,
                );
                (points, &candidate.resource)
            })
            .collect();

        // sort_by is stable: equal scores stay in load order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored.into_iter().take(count).map(|(_, r)| r).collect()
    }
}
