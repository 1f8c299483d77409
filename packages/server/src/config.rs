use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Where the resource document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcesLocation {
    Path(PathBuf),
    Url(String),
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub resources: ResourcesLocation,
    pub allowed_origins: Vec<String>,
    pub default_page_size: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (tests pass a map here)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let resources = match lookup("RESOURCES_URL").filter(|u| !u.trim().is_empty()) {
            Some(url) => ResourcesLocation::Url(url),
            None => ResourcesLocation::Path(PathBuf::from(
                lookup("RESOURCES_PATH").unwrap_or_else(|| "data/resources.json".to_string()),
            )),
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            resources,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            default_page_size: lookup("DEFAULT_PAGE_SIZE")
                .unwrap_or_else(|| "9".to_string())
                .parse()
                .context("DEFAULT_PAGE_SIZE must be a valid number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.resources,
            ResourcesLocation::Path(PathBuf::from("data/resources.json"))
        );
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.default_page_size, 9);
    }

    #[test]
    fn test_url_takes_precedence_over_path() {
        let config = config_from(&[
            ("RESOURCES_URL", "https://example.org/resources.json"),
            ("RESOURCES_PATH", "/srv/resources.json"),
        ])
        .unwrap();
        assert_eq!(
            config.resources,
            ResourcesLocation::Url("https://example.org/resources.json".to_string())
        );
    }

    #[test]
    fn test_allowed_origins_are_split_and_trimmed() {
        let config =
            config_from(&[("ALLOWED_ORIGINS", "https://a.org, https://b.org,,")]).unwrap();
        assert_eq!(config.allowed_origins, vec!["https://a.org", "https://b.org"]);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
