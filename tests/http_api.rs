//! HTTP API Tests
//!
//! Drives the axum router end to end: query-parameter decoding, CRUD
//! status codes, and the engine's behavior as seen over the wire.

use apidash::http_server::{HttpServer, HttpServerConfig};
use apidash::model::{ApiRecordDraft, ApiStatus, HttpMethod};
use apidash::store::DashboardStore;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn draft(name: &str, method: HttpMethod, path: &str, requests: u64) -> ApiRecordDraft {
    ApiRecordDraft {
        name: name.to_string(),
        version: "v1".to_string(),
        method,
        path: path.to_string(),
        status: ApiStatus::Healthy,
        requests,
        error_rate_percent: 0.5,
        p95_latency_ms: 120.0,
        owner_team: "core".to_string(),
    }
}

/// Router over a seeded two-record store
fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let store = DashboardStore::open(dir.path());
    store.initialize().unwrap();

    store.insert(draft("Users API", HttpMethod::GET, "/users", 100)).unwrap();
    store.insert(draft("Orders API", HttpMethod::POST, "/orders", 50)).unwrap();

    let router = HttpServer::with_config(HttpServerConfig::with_port(0), store).router();
    (dir, router)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_response(response).await
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

// =============================================================================
// Health and summary
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_dashboard_summary_returns_document() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(&app, "/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["apiList"].as_object().unwrap().len(), 2);
    assert!(body["meta"]["generatedAt"].as_str().unwrap().ends_with('Z'));
}

// =============================================================================
// Listing: filters, sort, pagination over the wire
// =============================================================================

#[tokio::test]
async fn test_list_defaults() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(&app, "/api/dashboard/api-lists").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total"], 2);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_method_filter() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(&app, "/api/dashboard/api-lists?method=GET").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["name"], "Users API");
}

#[tokio::test]
async fn test_list_numeric_filter_passes_through_raw() {
    let (_dir, app) = test_app();

    // ">=80" percent-encoded; parsing happens in the engine
    let (status, body) = get_json(&app, "/api/dashboard/api-lists?requests=%3E%3D80").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["requests"], 100);
}

#[tokio::test]
async fn test_list_malformed_numeric_filter_is_empty_not_error() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(&app, "/api/dashboard/api-lists?requests=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["totalPages"], 0);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_sort_desc_with_page_size_one() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(
        &app,
        "/api/dashboard/api-lists?sortBy=requests&order=desc&page=1&limit=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["data"][0]["name"], "Users API");
}

#[tokio::test]
async fn test_list_bad_pagination_falls_back_to_defaults() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(&app, "/api/dashboard/api-lists?page=zero&limit=-3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
}

// =============================================================================
// CRUD statuses
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_with_assigned_id() {
    let (_dir, app) = test_app();

    let payload = json!({
        "name": "Billing API",
        "version": "v1",
        "method": "PUT",
        "path": "/billing",
        "status": "degraded",
        "requests": 10,
        "errorRatePercent": 4.5,
        "p95LatencyMs": 900.0,
        "ownerTeam": "billing"
    });

    let (status, body) = send_json(&app, "POST", "/api/dashboard/api-lists", payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_create_duplicate_triple_conflicts() {
    let (_dir, app) = test_app();

    let payload = json!({
        "name": "Users API",
        "version": "v9",
        "method": "GET",
        "path": "/users",
        "status": "healthy",
        "requests": 1,
        "errorRatePercent": 0.0,
        "p95LatencyMs": 5.0,
        "ownerTeam": "identity"
    });

    let (status, body) = send_json(&app, "POST", "/api/dashboard/api-lists", payload).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "API already exists");
    assert_eq!(body["code"], 409);
}

#[tokio::test]
async fn test_get_patch_delete_round_trip() {
    let (_dir, app) = test_app();

    // Find the Users API id via the list endpoint
    let (_, listing) = get_json(&app, "/api/dashboard/api-lists?method=GET").await;
    let id = listing["data"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = get_json(&app, &format!("/api/dashboard/api-lists/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Users API");

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/dashboard/api-lists/{}", id),
        json!({"status": "down", "requests": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "down");
    assert_eq!(body["requests"], 0);
    assert_eq!(body["id"], id.as_str());

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/dashboard/api-lists/{}", id),
        Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    let (status, _) = get_json(&app, &format!("/api/dashboard/api-lists/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_id_is_404() {
    let (_dir, app) = test_app();

    let (status, body) = get_json(&app, "/api/dashboard/api-lists/no-such-id").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "API not found");
    assert_eq!(body["code"], 404);
}
