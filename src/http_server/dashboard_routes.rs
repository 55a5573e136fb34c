//! Dashboard HTTP routes
//!
//! - `GET  /`                dashboard summary document
//! - `GET  /api-lists`       filtered/sorted/paginated inventory
//! - `POST /api-lists`       create a record
//! - `GET  /api-lists/:id`   single record
//! - `PATCH /api-lists/:id`  partial update
//! - `DELETE /api-lists/:id` remove a record
//!
//! The list handler passes filter values through to the engine as raw
//! strings; parsing numeric filters is the engine's job, not this layer's.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::engine::{QueryDescriptor, QueryEngine, QueryResult};
use crate::model::{ApiRecord, ApiRecordDraft, ApiRecordPatch, DashboardDocument, RecordField};
use crate::store::DashboardStore;

use super::errors::{ApiError, ApiResult};

/// Shared handler state
pub struct DashboardState {
    pub store: DashboardStore,
}

impl DashboardState {
    pub fn new(store: DashboardStore) -> Self {
        Self { store }
    }
}

/// Single record response envelope
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub data: ApiRecord,
}

/// Builds the dashboard router
pub fn dashboard_routes(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/", get(summary_handler))
        .route("/api-lists", get(list_handler).post(create_handler))
        .route(
            "/api-lists/:id",
            get(get_handler).patch(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

/// Decodes query parameters into an engine descriptor.
///
/// `page` and `limit` must parse as integers to count as supplied; the
/// engine coerces anything else to its defaults. One filter value is read
/// per filterable field, unparsed.
fn descriptor_from_params(params: &HashMap<String, String>) -> QueryDescriptor {
    let mut descriptor = QueryDescriptor {
        page: params.get("page").and_then(|v| v.parse().ok()),
        limit: params.get("limit").and_then(|v| v.parse().ok()),
        sort_by: params.get("sortBy").cloned(),
        order: params.get("order").cloned(),
        ..Default::default()
    };

    for field in RecordField::FILTERABLE {
        if let Some(value) = params.get(field.name()) {
            if !value.is_empty() {
                descriptor
                    .filters
                    .insert(field.name().to_string(), value.clone());
            }
        }
    }

    descriptor
}

/// Whole dashboard document (summary view)
async fn summary_handler(
    State(state): State<Arc<DashboardState>>,
) -> ApiResult<Json<DashboardDocument>> {
    let document = state.store.load()?;
    Ok(Json(document))
}

/// Filtered, sorted, paginated inventory listing
async fn list_handler(
    State(state): State<Arc<DashboardState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<QueryResult>> {
    let descriptor = descriptor_from_params(&params);
    let records = state.store.snapshot()?;

    Ok(Json(QueryEngine::query(&records, &descriptor)))
}

/// Create a record; 409 when the (name, method, path) triple exists
async fn create_handler(
    State(state): State<Arc<DashboardState>>,
    Json(draft): Json<ApiRecordDraft>,
) -> ApiResult<(StatusCode, Json<ApiRecord>)> {
    let record = state.store.insert(draft)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Single record lookup
async fn get_handler(
    State(state): State<Arc<DashboardState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecordResponse>> {
    let record = state.store.get(&id)?;
    Ok(Json(RecordResponse { data: record }))
}

/// Partial update
async fn update_handler(
    State(state): State<Arc<DashboardState>>,
    Path(id): Path<String>,
    Json(patch): Json<ApiRecordPatch>,
) -> ApiResult<Json<ApiRecord>> {
    let record = state.store.update(&id, patch)?;
    Ok(Json(record))
}

/// Remove a record, returning it
async fn delete_handler(
    State(state): State<Arc<DashboardState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiRecord>> {
    let record = state.store.delete(&id)?;
    Ok(Json(record))
}
