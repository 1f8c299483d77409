//! The six canonical top-level categories.

use serde::{Deserialize, Serialize};

/// Fixed top-level buckets used when repairing category coverage.
///
/// Declaration order is the canonical order; every pass that walks the
/// categories walks them in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalCategory {
    #[serde(rename = "Derechos")]
    Derechos,
    #[serde(rename = "Laboral")]
    Laboral,
    #[serde(rename = "Seguridad Social")]
    SeguridadSocial,
    #[serde(rename = "Terminación de contrato laboral")]
    TerminacionContrato,
    #[serde(rename = "Pensión")]
    Pension,
    #[serde(rename = "Trámites laborales")]
    TramitesLaborales,
}

impl CanonicalCategory {
    pub const ALL: [CanonicalCategory; 6] = [
        CanonicalCategory::Derechos,
        CanonicalCategory::Laboral,
        CanonicalCategory::SeguridadSocial,
        CanonicalCategory::TerminacionContrato,
        CanonicalCategory::Pension,
        CanonicalCategory::TramitesLaborales,
    ];

    /// Bucket for resources no keyword could place.
    pub const FALLBACK: CanonicalCategory = CanonicalCategory::Laboral;

    pub fn label(self) -> &'static str {
        match self {
            CanonicalCategory::Derechos => "Derechos",
            CanonicalCategory::Laboral => "Laboral",
            CanonicalCategory::SeguridadSocial => "Seguridad Social",
            CanonicalCategory::TerminacionContrato => "Terminación de contrato laboral",
            CanonicalCategory::Pension => "Pensión",
            CanonicalCategory::TramitesLaborales => "Trámites laborales",
        }
    }

    /// Content keywords that place an unlabeled resource in this bucket.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            CanonicalCategory::Derechos => &["derecho"],
            CanonicalCategory::Laboral => &["contrato", "trabajo"],
            CanonicalCategory::SeguridadSocial => &["salud", "seguridad"],
            CanonicalCategory::TerminacionContrato => &["despido", "terminación"],
            CanonicalCategory::Pension => &["pensión", "jubilación"],
            CanonicalCategory::TramitesLaborales => &["trámite", "procedimiento"],
        }
    }

    /// Exact label match, no normalization.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Classify lowercased content by the first keyword hit, in canonical order.
    pub fn classify_content(lowered: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.keywords().iter().any(|k| lowered.contains(k)))
            .unwrap_or(Self::FALLBACK)
    }
}

impl std::fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CanonicalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Unknown canonical category: {}", s))
    }
}
