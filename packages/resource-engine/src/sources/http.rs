//! HTTP source for a resource document served as a static asset.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{SourceError, SourceResult};
use crate::traits::ResourceSource;

/// Fetches the resource document with a single GET request.
///
/// # Example
///
/// ```rust,ignore
/// use resource_engine::{HttpSource, ResourceEngine};
///
/// let source = HttpSource::new("https://example.org/data/resources.json");
/// let engine = ResourceEngine::new(source);
/// engine.load().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    user_agent: String,
}

impl HttpSource {
    /// Create a source with a default client (30s timeout).
    ///
    /// Falls back to reqwest's default client, without the timeout, if the
    /// configured client cannot be built.
    pub fn new(url: impl Into<String>) -> Self {
        let client = build_client().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build HTTP client, using defaults without timeout");
            reqwest::Client::new()
        });

        Self {
            client,
            url: url.into(),
            user_agent: "ResourceEngine/1.0".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self) -> SourceResult<Vec<u8>> {
        debug!(url = %self.url, "HTTP fetch starting");
        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "HTTP request failed");
                SourceError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = %status, "Resource document request rejected");
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Http(Box::new(e)))?;

        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
