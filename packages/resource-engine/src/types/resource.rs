//! Resource record and the document that carries a collection of them.

use serde::{Deserialize, Deserializer, Serialize};

/// One educational document describing a labor-rights topic.
///
/// Optional text is `None` when the source omits it or leaves it blank;
/// the loader never keeps an empty string in an optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,

    #[serde(default, deserialize_with = "non_blank")]
    pub title: Option<String>,

    /// Primary label. Free text, not guaranteed to match a canonical category.
    #[serde(default)]
    pub category: String,

    /// Secondary label, comma-joined when the source lists several.
    #[serde(default, deserialize_with = "joined_labels")]
    pub subcategory: Option<String>,

    #[serde(default, deserialize_with = "non_blank")]
    pub question: Option<String>,

    // Long-form sections
    #[serde(default, deserialize_with = "non_blank")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub what_to_do: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub where_to: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub alternatives: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub considerations: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub regulations: Option<String>,

    // Short descriptive answers ("Sí, aproximadamente $50.000 COP")
    #[serde(default, deserialize_with = "non_blank")]
    pub costs: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub requires_lawyer: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub is_online: Option<String>,

    /// Derived at load time, never read from the source.
    #[serde(default, skip_deserializing)]
    pub tags: Vec<String>,
}

impl Resource {
    /// Create a resource with only the required fields set.
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        let mut resource = Self {
            id: id.into(),
            title: None,
            category: category.into(),
            subcategory: None,
            question: None,
            content: None,
            what_to_do: None,
            where_to: None,
            alternatives: None,
            considerations: None,
            regulations: None,
            costs: None,
            requires_lawyer: None,
            is_online: None,
            tags: Vec::new(),
        };
        resource.refresh_tags();
        resource
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self.refresh_tags();
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Title to show, falling back to the question this resource answers.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.question.as_deref())
    }

    /// Recompute `tags` as `[category, subcategory?]`.
    pub fn refresh_tags(&mut self) {
        self.tags = std::iter::once(self.category.clone())
            .chain(self.subcategory.clone())
            .collect();
    }

    /// Fields scanned by free-text search, in concatenation order.
    pub(crate) fn searchable_fields(&self) -> [Option<&str>; 10] {
        [
            self.title.as_deref(),
            Some(self.category.as_str()).filter(|c| !c.is_empty()),
            self.subcategory.as_deref(),
            self.question.as_deref(),
            self.content.as_deref(),
            self.what_to_do.as_deref(),
            self.where_to.as_deref(),
            self.alternatives.as_deref(),
            self.considerations.as_deref(),
            self.regulations.as_deref(),
        ]
    }

    /// Fields compared when ranking related resources.
    pub(crate) fn relevance_fields(&self) -> [Option<&str>; 3] {
        [
            self.title.as_deref(),
            self.question.as_deref(),
            self.content.as_deref(),
        ]
    }
}

/// The source document: `{ "resources": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceDocument {
    pub resources: Vec<Resource>,
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Labels {
    One(String),
    Many(Vec<String>),
}

fn joined_labels<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let joined = match Option::<Labels>::deserialize(deserializer)? {
        None => None,
        Some(Labels::One(label)) => Some(label),
        Some(Labels::Many(labels)) => Some(
            labels
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        ),
    };
    Ok(joined.filter(|s| !s.trim().is_empty()))
}
