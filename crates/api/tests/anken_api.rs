//! HTTP-level integration tests for the `/projects`, `/stats` and
//! `/statuses` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Each test owns a fresh store.

mod common;

use std::sync::Arc;

use anken_db::MemStore;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::{TimeDelta, Utc};
use common::{body_json, build_test_app, delete, get, post_json, put_json, send};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create(store: &Arc<MemStore>, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(store.clone()), "/api/v1/projects", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn list(store: &Arc<MemStore>, uri: &str) -> Vec<serde_json::Value> {
    let response = get(build_test_app(store.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response)
        .await
        .as_array()
        .expect("response should be an array")
        .clone()
}

fn ids(items: &[serde_json::Value]) -> Vec<String> {
    items
        .iter()
        .map(|x| x["anken_id"].as_str().unwrap().to_string())
        .collect()
}

fn date_in_days(days: i64) -> String {
    (Utc::now() + TimeDelta::days(days))
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_project_returns_201() {
    let store = Arc::new(MemStore::new());
    let json = create(
        &store,
        json!({
            "anken_name": "Webアプリケーション開発",
            "status_code": 2,
            "price": "¥5,000,000",
            "telework_yn": 1
        }),
    )
    .await;

    assert_eq!(json["anken_name"], "Webアプリケーション開発");
    assert_eq!(json["status_code"], 2);
    assert_eq!(json["telework_yn"], 1);
    assert!(json["anken_id"].is_string());
    assert_eq!(json["created_at"], json["updated_at"]);
    assert_eq!(json["status_label"], "進行中");
    assert!(json["contact_name"].is_null());
    assert!(json["account_name"].is_null());
}

#[tokio::test]
async fn test_missing_or_unrecognized_status_is_labelled_unknown() {
    let store = Arc::new(MemStore::new());
    let without = create(&store, json!({ "anken_name": "No status" })).await;
    let odd = create(&store, json!({ "anken_name": "Odd", "status_code": 9 })).await;

    assert_eq!(without["status_label"], "unknown");
    assert_eq!(odd["status_label"], "unknown");
}

#[tokio::test]
async fn test_create_with_unknown_field_returns_400() {
    let store = Arc::new(MemStore::new());
    let response = post_json(
        build_test_app(store.clone()),
        "/api/v1/projects",
        json!({ "anken_name": "X", "colour": "red" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("colour"));

    assert!(list(&store, "/api/v1/projects").await.is_empty());
}

#[tokio::test]
async fn test_create_with_client_supplied_id_returns_400() {
    let store = Arc::new(MemStore::new());
    let response = post_json(
        build_test_app(store),
        "/api/v1/projects",
        json!({ "anken_id": "mine" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_wrong_type_returns_400() {
    let store = Arc::new(MemStore::new());
    let response = post_json(
        build_test_app(store),
        "/api/v1/projects",
        json!({ "status_code": "in progress" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_400() {
    let store = Arc::new(MemStore::new());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/projects")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = send(build_test_app(store), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_project_by_id() {
    let store = Arc::new(MemStore::new());
    let created = create(&store, json!({ "anken_name": "Get Me" })).await;
    let id = created["anken_id"].as_str().unwrap();

    let response = get(build_test_app(store.clone()), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["anken_name"], "Get Me");
}

#[tokio::test]
async fn test_get_nonexistent_project_returns_404() {
    let store = Arc::new(MemStore::new());
    let response = get(build_test_app(store), "/api/v1/projects/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_project_merges_fields() {
    let store = Arc::new(MemStore::new());
    let created = create(
        &store,
        json!({ "anken_name": "Original", "detail": "old", "price": "¥1,000,000" }),
    )
    .await;
    let id = created["anken_id"].as_str().unwrap();

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/v1/projects/{id}"),
        json!({ "anken_name": "Updated", "detail": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["anken_name"], "Updated");
    assert!(json["detail"].is_null());
    assert_eq!(json["price"], "¥1,000,000");
    assert_eq!(json["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_update_nonexistent_project_returns_404() {
    let store = Arc::new(MemStore::new());
    let response = put_json(
        build_test_app(store),
        "/api/v1/projects/does-not-exist",
        json!({ "anken_name": "X" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_unknown_field_returns_400_and_changes_nothing() {
    let store = Arc::new(MemStore::new());
    let created = create(&store, json!({ "anken_name": "Keep" })).await;
    let id = created["anken_id"].as_str().unwrap();

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/v1/projects/{id}"),
        json!({ "anken_name": "Changed", "created_at": "2000-01-01T00:00:00Z" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(build_test_app(store.clone()), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_delete_project_returns_200_then_404() {
    let store = Arc::new(MemStore::new());
    let created = create(&store, json!({ "anken_name": "Delete Me" })).await;
    let id = created["anken_id"].as_str().unwrap();
    let uri = format!("/api/v1/projects/{id}");

    let response = delete(build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Project deleted successfully"
    );

    let response = get(build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing and search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_projects_newest_first() {
    let store = Arc::new(MemStore::new());
    let p1 = create(&store, json!({ "anken_name": "P1" })).await;
    let p2 = create(&store, json!({ "anken_name": "P2" })).await;

    let items = list(&store, "/api/v1/projects").await;
    assert_eq!(ids(&items), ids(&[p2, p1]));
}

#[tokio::test]
async fn test_search_by_term_and_status() {
    let store = Arc::new(MemStore::new());
    let web_active = create(&store, json!({ "anken_name": "Web Shop", "status_code": 2 })).await;
    let web_new = create(
        &store,
        json!({ "anken_name": "Mobile", "detail": "webview app", "status_code": 1 }),
    )
    .await;
    create(&store, json!({ "anken_name": "Batch", "status_code": 2 })).await;
    create(&store, json!({ "notes": "web" })).await;

    let items = list(&store, "/api/v1/projects?q=WEB").await;
    assert_eq!(ids(&items), ids(&[web_new.clone(), web_active.clone()]));

    let items = list(&store, "/api/v1/projects?q=web&status=2").await;
    assert_eq!(ids(&items), ids(&[web_active.clone()]));

    let items = list(&store, "/api/v1/projects?status=1").await;
    assert_eq!(ids(&items), ids(&[web_new]));

    let items = list(&store, "/api/v1/projects?search=shop").await;
    assert_eq!(ids(&items), ids(&[web_active]));
}

#[tokio::test]
async fn test_empty_filters_list_everything() {
    let store = Arc::new(MemStore::new());
    create(&store, json!({ "anken_name": "A" })).await;
    create(&store, json!({})).await;

    let all = list(&store, "/api/v1/projects").await;
    let filtered = list(&store, "/api/v1/projects?q=&status=").await;
    assert_eq!(all.len(), 2);
    assert_eq!(all, filtered);
}

#[tokio::test]
async fn test_non_numeric_status_filter_returns_400() {
    let store = Arc::new(MemStore::new());
    let response = get(build_test_app(store), "/api/v1/projects?status=active").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_malformed_query_string_returns_json_400() {
    let store = Arc::new(MemStore::new());

    for uri in [
        "/api/v1/projects?q=a&search=b",
        "/api/v1/projects?status=2&status=3",
    ] {
        let response = get(build_test_app(store.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST", "{uri}");
        assert!(json["error"].as_str().unwrap().contains("duplicate field"));
    }
}

#[tokio::test]
async fn test_status_update_drops_project_from_filter() {
    let store = Arc::new(MemStore::new());
    let created = create(&store, json!({ "anken_name": "P", "status_code": 2 })).await;
    let id = created["anken_id"].as_str().unwrap();
    assert_eq!(list(&store, "/api/v1/projects?status=2").await.len(), 1);

    put_json(
        build_test_app(store.clone()),
        &format!("/api/v1/projects/{id}"),
        json!({ "status_code": 3 }),
    )
    .await;

    assert!(list(&store, "/api/v1/projects?status=2").await.is_empty());
}

// ---------------------------------------------------------------------------
// Stats and statuses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_stats_aggregate() {
    let store = Arc::new(MemStore::new());
    create(
        &store,
        json!({ "status_code": 2, "price": "¥5,000,000", "end_date": date_in_days(10) }),
    )
    .await;
    create(
        &store,
        json!({ "status_code": 1, "price": "¥3,000,000", "end_date": date_in_days(40) }),
    )
    .await;

    let response = get(build_test_app(store), "/api/v1/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalProjects"], 2);
    assert_eq!(json["activeProjects"], 1);
    assert_eq!(json["urgentProjects"], 1);
    assert_eq!(json["monthlyRevenue"], "¥5.0M");
}

#[tokio::test]
async fn test_stats_on_empty_store() {
    let store = Arc::new(MemStore::new());
    let json = body_json(get(build_test_app(store), "/api/v1/stats").await).await;

    assert_eq!(json["totalProjects"], 0);
    assert_eq!(json["monthlyRevenue"], "¥0.0M");
}

#[tokio::test]
async fn test_statuses_table() {
    let store = Arc::new(MemStore::new());
    let response = get(build_test_app(store), "/api/v1/statuses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let table = json.as_array().unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table[1]["code"], 2);
    assert_eq!(table[1]["label"], "進行中");
    assert_eq!(table[1]["color"], "bg-green-100 text-green-800");
}
