//! Test harness that drives the router in-process.
//!
//! No sockets: requests go straight through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use resource_engine::testing::{sample_resources, MockSource};
use resource_engine::{ResourceEngine, ResourceSource};
use serde_json::Value;
use server_core::server::{build_app, AppState};
use std::sync::Arc;
use tower::ServiceExt;

/// Page size used by the harness (matches the production default).
pub const TEST_PAGE_SIZE: usize = 9;

fn init_tracing() {
    // Run tests with: RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Router plus the engine behind it.
pub struct TestHarness {
    pub app: Router,
    pub engine: Arc<ResourceEngine>,
}

impl TestHarness {
    /// Harness over any source; the engine loads lazily on first request.
    pub fn with_source(source: impl ResourceSource + 'static) -> Self {
        init_tracing();
        let engine = Arc::new(ResourceEngine::new(source));
        let app = build_app(AppState::new(engine.clone(), TEST_PAGE_SIZE), &[]);
        Self { app, engine }
    }

    /// Harness over the sample labor-rights collection.
    pub fn sample() -> Self {
        Self::with_source(MockSource::with_resources(sample_resources()))
    }

    /// GET `uri` and return the status plus the parsed JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

/// Ids of a JSON array of resources, in order.
pub fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|r| r["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
