mod common;

use common::TestApp;
use lead_service::services::{FailureMode, InMemoryStore};
use serde_json::json;
use std::sync::Arc;

fn is_hex_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_lead_returns_ok_and_id() {
    let app = TestApp::spawn().await;

    let response = app
        .post_lead(&json!({ "name": "Jane", "email": "jane@x.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    let id = body["id"].as_str().expect("id should be a string");
    assert!(is_hex_id(id), "unexpected id format: {}", id);
}

#[tokio::test]
async fn created_lead_is_retrievable() {
    let app = TestApp::spawn().await;

    let created: serde_json::Value = app
        .post_lead(&json!({
            "name": "Jane",
            "email": "jane@x.com",
            "company": "Acme"
        }))
        .await
        .json()
        .await
        .unwrap();

    let listed: serde_json::Value = app.get("/api/leads").await.json().await.unwrap();
    let items = listed["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["id"], created["id"]);
    assert_eq!(item["name"], "Jane");
    assert_eq!(item["email"], "jane@x.com");
    assert_eq!(item["company"], "Acme");
    assert!(item.get("_id").is_none());
    assert!(item["created_at"].is_string());
    assert!(item["updated_at"].is_string());
}

#[tokio::test]
async fn duplicate_submissions_create_duplicate_records() {
    let app = TestApp::spawn().await;
    let payload = json!({ "name": "Jane", "email": "jane@x.com" });

    let first: serde_json::Value = app.post_lead(&payload).await.json().await.unwrap();
    let second: serde_json::Value = app.post_lead(&payload).await.json().await.unwrap();

    assert_ne!(first["id"], second["id"]);
    let store = app.store.as_ref().unwrap();
    assert_eq!(store.count("lead").await, 2);
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_store() {
    let app = TestApp::spawn().await;

    let response = app.post_lead(&json!({ "name": "Jane" })).await;
    assert_eq!(response.status().as_u16(), 422);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("email"));
    assert_eq!(app.store.as_ref().unwrap().count("lead").await, 0);
}

#[tokio::test]
async fn empty_strings_are_accepted_and_stored() {
    let app = TestApp::spawn().await;

    let response = app.post_lead(&json!({ "name": "", "email": "" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let listed: serde_json::Value = app.get("/api/leads").await.json().await.unwrap();
    let item = &listed["items"][0];
    assert_eq!(item["name"], "");
    assert_eq!(item["email"], "");
}

#[tokio::test]
async fn store_failure_on_create_is_500_with_detail() {
    let store = Arc::new(
        InMemoryStore::new("lead_test")
            .with_failure(FailureMode::All("connection refused".to_string())),
    );
    let app = TestApp::spawn_with_store(Some(store), true).await;

    let response = app
        .post_lead(&json!({ "name": "Jane", "email": "jane@x.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "connection refused");
}

#[tokio::test]
async fn create_without_store_is_500() {
    let app = TestApp::spawn_without_store().await;

    let response = app
        .post_lead(&json!({ "name": "Jane", "email": "jane@x.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Database not available"));
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn list_respects_limit() {
    let app = TestApp::spawn().await;
    for name in ["Jane", "John"] {
        app.post_lead(&json!({ "name": name, "email": "x@x.com" }))
            .await;
    }

    let body: serde_json::Value = app.get("/api/leads?limit=1").await.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["name"], "Jane");
}

#[tokio::test]
async fn list_returns_min_of_count_and_limit() {
    let app = TestApp::spawn().await;
    for i in 0..3 {
        app.post_lead(&json!({ "name": format!("lead-{i}"), "email": "x@x.com" }))
            .await;
    }

    let body: serde_json::Value = app.get("/api/leads?limit=10").await.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert!(item["id"].is_string());
        assert!(item["created_at"].is_string());
    }
}

#[tokio::test]
async fn list_defaults_to_twenty() {
    let app = TestApp::spawn().await;
    for i in 0..25 {
        app.post_lead(&json!({ "name": format!("lead-{i}"), "email": "x@x.com" }))
            .await;
    }

    let body: serde_json::Value = app.get("/api/leads").await.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn limit_zero_returns_empty_items() {
    let app = TestApp::spawn().await;
    app.post_lead(&json!({ "name": "Jane", "email": "jane@x.com" }))
        .await;

    let response = app.get("/api/leads?limit=0").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn list_on_empty_collection() {
    let app = TestApp::spawn().await;

    let body: serde_json::Value = app.get("/api/leads").await.json().await.unwrap();
    assert_eq!(body, json!({ "items": [] }));
}

#[tokio::test]
async fn non_integer_limit_is_400_with_detail() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/leads?limit=abc").await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("detail body should be JSON");
    assert!(body["detail"].as_str().unwrap().contains("invalid digit"));
}

#[tokio::test]
async fn store_failure_on_list_is_500_with_detail() {
    let store = Arc::new(
        InMemoryStore::new("lead_test").with_failure(FailureMode::All("cursor killed".to_string())),
    );
    let app = TestApp::spawn_with_store(Some(store), true).await;

    let response = app.get("/api/leads").await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "cursor killed");
}

// =============================================================================
// Schema
// =============================================================================

#[tokio::test]
async fn schema_lists_lead_fields() {
    let app = TestApp::spawn_without_store().await;

    let first: serde_json::Value = app.get("/schema").await.json().await.unwrap();
    let second: serde_json::Value = app.get("/schema").await.json().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first["lead"]["fields"],
        json!(["name", "email", "phone", "company", "message", "source"])
    );
}
