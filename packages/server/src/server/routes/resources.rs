//! Resources API handlers.
//!
//! Thin JSON wrappers over the engine; the engine's queries are total, so
//! the only request errors are bad pagination and unknown ids.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use indexmap::IndexMap;
use resource_engine::Resource;
use serde::Deserialize;

use crate::common::{Page, PaginationArgs};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Related resources returned when `count` is omitted
pub const DEFAULT_RELATED_COUNT: usize = 3;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl ListParams {
    fn pagination(&self) -> PaginationArgs {
        PaginationArgs {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RelatedParams {
    pub count: Option<usize>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// GET /api/resources?category=&q=&page=&per_page=
pub async fn list_resources(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Resource>>, ApiError> {
    let args = params
        .pagination()
        .validate(state.default_page_size)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let results = state
        .engine
        .filter(non_blank(&params.category), non_blank(&params.q))
        .await;

    Ok(Json(Page::from_items(results, &args)))
}

/// GET /api/categories
pub async fn list_categories(
    Extension(state): Extension<AppState>,
) -> Json<IndexMap<String, Vec<Resource>>> {
    let buckets = state
        .engine
        .ensure_all_categories()
        .await
        .into_iter()
        .map(|(category, resources)| (category.label().to_string(), resources))
        .collect();

    Json(buckets)
}

/// GET /api/categories/:category
pub async fn list_category(
    Extension(state): Extension<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Resource>> {
    Json(state.engine.by_category(&category).await)
}

/// GET /api/resources/:id
pub async fn get_resource(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, ApiError> {
    state
        .engine
        .by_id(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// GET /api/resources/:id/related?count=
pub async fn list_related(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RelatedParams>,
) -> Json<Vec<Resource>> {
    let count = params.count.unwrap_or(DEFAULT_RELATED_COUNT);
    Json(state.engine.related(&id, count).await)
}
