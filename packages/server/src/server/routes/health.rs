use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    resources_loaded: bool,
    resource_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

/// Health check endpoint
///
/// Reports whether the resource collection has been loaded and how many
/// resources it holds. A failed load still reports 200: the API keeps
/// serving (empty) results, and the count shows the degradation.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let resources_loaded = state.engine.is_loaded();
    let resource_count = if resources_loaded {
        state.engine.library().await.len()
    } else {
        0
    };

    let status = if resources_loaded && resource_count > 0 {
        "healthy"
    } else {
        "degraded"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            resources_loaded,
            resource_count,
            source: resources_loaded.then(|| state.engine.origin()),
        }),
    )
}
