//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use resource_engine::{FileSource, HttpSource, ResourceEngine, ResourceSource};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Config, ResourcesLocation};
use crate::server::routes::{
    get_resource, health_handler, list_categories, list_category, list_related, list_resources,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ResourceEngine>,
    pub default_page_size: usize,
}

impl AppState {
    pub fn new(engine: Arc<ResourceEngine>, default_page_size: usize) -> Self {
        Self {
            engine,
            default_page_size,
        }
    }
}

/// Build the resource source selected by configuration
pub fn build_source(location: &ResourcesLocation) -> Box<dyn ResourceSource> {
    match location {
        ResourcesLocation::Url(url) => Box::new(HttpSource::new(url.clone())),
        ResourcesLocation::Path(path) => Box::new(FileSource::new(path.clone())),
    }
}

/// Build the engine for a configuration (not yet loaded)
pub fn build_engine(config: &Config) -> Arc<ResourceEngine> {
    Arc::new(ResourceEngine::new(build_source(&config.resources)))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // No configured origins: allow any origin (development)
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    // Category browsing lives outside /api/resources so every id is reachable
    let resources = Router::new()
        .route("/", get(list_resources))
        .route("/:id", get(get_resource))
        .route("/:id/related", get(list_related));

    let categories = Router::new()
        .route("/", get(list_categories))
        .route("/:category", get(list_category));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/resources", resources)
        .nest("/api/categories", categories)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
