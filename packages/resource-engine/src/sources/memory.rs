//! In-memory source for embedded documents.

use async_trait::async_trait;

use crate::error::SourceResult;
use crate::traits::ResourceSource;

/// Serves a document that is already in memory (e.g. `include_bytes!`).
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: "static".to_string(),
            bytes: bytes.into(),
        }
    }

    /// Name reported in logs instead of "static".
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl ResourceSource for StaticSource {
    async fn fetch(&self) -> SourceResult<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
