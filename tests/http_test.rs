//! Integration tests for the HTTP surface on fallback providers.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_greeting_without_cached_value() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Hello World! counter=0 val=null");
}

#[tokio::test]
async fn test_increment_then_greet() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/inc", Some(r#"{"name":"Alice"}"#)).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["counter"], 1);
    assert_eq!(body["name"], "Alice");

    let response = app.request("GET", "/?name=Alice", None).await;
    assert_eq!(response.body, "Hello Alice! counter=1 val=1");
}

#[tokio::test]
async fn test_increment_stores_prefixed_key() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/inc", Some("{}")).await;

    assert_eq!(app.state.cache.prefix(), "counter:");
    assert_eq!(
        app.state.cache.get_string("World").await.unwrap(),
        Some("1".to_string())
    );
}

#[tokio::test]
async fn test_increment_without_body_uses_default_name() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/inc", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["counter"], 1);
    assert_eq!(body["name"], "World");

    let response = app.request("GET", "/", None).await;
    assert_eq!(response.body, "Hello World! counter=1 val=1");
}

#[tokio::test]
async fn test_increment_with_malformed_json_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/inc", Some("{not json")).await;
    assert!(response.status.is_client_error());

    let response = app.request("GET", "/status", None).await;
    assert!(response.body.starts_with("counter=0\n"));
}

#[tokio::test]
async fn test_status_reports_fallback_providers() {
    let app = helpers::TestApp::new().await;
    app.request("POST", "/inc", Some(r#"{"name":"a"}"#)).await;
    app.request("POST", "/inc", Some(r#"{"name":"b"}"#)).await;

    let response = app.request("GET", "/status", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        "counter=2\ncache=memory\nblob_storage=memory\ndatabase=memory"
    );
}

#[tokio::test]
async fn test_blob_store_before_upload_is_empty() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/blob-store", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Data=\n");
}

#[tokio::test]
async fn test_blob_store_roundtrip() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/blob-store", Some("{}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "{}");

    let response = app.request("GET", "/blob-store", None).await;
    assert!(response.body.starts_with("Data=Hello, World! "));
    assert!(response.body.ends_with('\n'));
}

#[tokio::test]
async fn test_items_uses_fallback_dataset() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/items", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Items=1,2,3,4,5\n");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["cache_reachable"], true);
}
