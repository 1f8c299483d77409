//! Free-text search over the precomputed search text.

use tracing::debug;

use crate::library::category::matches_category;
use crate::library::ResourceLibrary;
use crate::types::Resource;

/// Lowercased whitespace-separated query terms.
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

fn matches_terms(search_text: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| search_text.contains(t.as_str()))
}

impl ResourceLibrary {
    /// Resources containing any query term, in load order.
    ///
    /// A blank query returns the whole collection. Terms are OR-ed and
    /// matched as substrings, so "despid" finds "despido".
    pub fn search(&self, query: &str) -> Vec<&Resource> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return self.list_all();
        }

        let matched: Vec<&Resource> = self
            .entries
            .iter()
            .filter(|entry| matches_terms(&entry.search_text, &terms))
            .map(|entry| &entry.resource)
            .collect();

        debug!(query = %query, terms = terms.len(), matched = matched.len(), "Search");
        matched
    }

    /// Optional category and optional query, intersected, in load order.
    pub fn filter(&self, category: Option<&str>, query: Option<&str>) -> Vec<&Resource> {
        let terms = query.map(tokenize).unwrap_or_default();

        self.entries
            .iter()
            .filter(|entry| category.map_or(true, |c| matches_category(&entry.resource, c)))
            .filter(|entry| terms.is_empty() || matches_terms(&entry.search_text, &terms))
            .map(|entry| &entry.resource)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> ResourceLibrary {
        ResourceLibrary::new(vec![
            Resource::new("contrato", "Laboral")
                .with_title("Contrato a término fijo")
                .with_content("Duración máxima de tres años."),
            Resource::new("pension", "Pensión")
                .with_question("¿Cuántas semanas necesito para pensionarme?")
                .with_content("Se requieren 1300 semanas cotizadas."),
            Resource::new("despido", "Terminación de contrato laboral")
                .with_title("Despido sin justa causa")
                .with_content("El empleador debe pagar indemnización."),
        ])
    }

    fn ids(resources: Vec<&Resource>) -> Vec<&str> {
        resources.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_drops_blanks() {
        assert_eq!(tokenize("  Despido   SIN\tcausa "), vec!["despido", "sin", "causa"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let library = library();
        assert_eq!(ids(library.search("")), vec!["contrato", "pension", "despido"]);
        assert_eq!(ids(library.search("  \n ")), vec!["contrato", "pension", "despido"]);
    }

    #[test]
    fn test_any_term_matches() {
        let library = library();
        assert_eq!(ids(library.search("semanas indemnización")), vec!["pension", "despido"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let library = library();
        assert_eq!(ids(library.search("DESPID")), vec!["despido"]);
        // Category text is searchable too
        assert_eq!(ids(library.search("terminación")), vec!["despido"]);
    }

    #[test]
    fn test_result_keeps_load_order() {
        let library = library();
        assert_eq!(ids(library.search("despido contrato")), vec!["contrato", "despido"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(library().search("vivienda").is_empty());
    }

    #[test]
    fn test_every_section_is_searchable() {
        let library = ResourceLibrary::new(vec![
            Resource {
                what_to_do: Some("Radicar un derecho de petición".into()),
                ..Resource::new("what", "Laboral")
            },
            Resource {
                where_to: Some("Inspección de trabajo".into()),
                ..Resource::new("where", "Laboral")
            },
            Resource {
                alternatives: Some("Conciliación extrajudicial".into()),
                ..Resource::new("alternatives", "Laboral")
            },
            Resource {
                considerations: Some("Conserve los desprendibles".into()),
                ..Resource::new("considerations", "Laboral")
            },
            Resource {
                regulations: Some("Código Sustantivo del Trabajo".into()),
                ..Resource::new("regulations", "Laboral")
            },
            Resource::new("subcategory", "Laboral").with_subcategory("Vacaciones"),
        ]);

        assert_eq!(ids(library.search("petición")), vec!["what"]);
        assert_eq!(ids(library.search("inspección")), vec!["where"]);
        assert_eq!(ids(library.search("extrajudicial")), vec!["alternatives"]);
        assert_eq!(ids(library.search("desprendibles")), vec!["considerations"]);
        assert_eq!(ids(library.search("sustantivo")), vec!["regulations"]);
        assert_eq!(ids(library.search("vacaciones")), vec!["subcategory"]);
    }

    #[test]
    fn test_short_answers_are_not_searchable() {
        let library = ResourceLibrary::new(vec![Resource {
            costs: Some("Aproximadamente $50.000 COP".into()),
            requires_lawyer: Some("Recomendable abogado".into()),
            is_online: Some("Ventanilla virtual".into()),
            ..Resource::new("answers", "Laboral")
        }]);

        assert!(library.search("aproximadamente").is_empty());
        assert!(library.search("abogado").is_empty());
        assert!(library.search("ventanilla").is_empty());
        assert_eq!(ids(library.search("laboral")), vec!["answers"]);
    }

    #[test]
    fn test_filter_intersects_category_and_query() {
        let library = library();
        assert_eq!(ids(library.filter(Some("Laboral"), Some("años"))), vec!["contrato"]);
        assert_eq!(ids(library.filter(Some("Pensión"), None)), vec!["pension"]);
        assert_eq!(ids(library.filter(None, Some("indemnización"))), vec!["despido"]);
        assert_eq!(library.filter(None, None).len(), 3);
    }
}
