//! HTTP-level tests driving the assembled application in-process.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use edge_demo_core::demo_server;
use edge_demo_server::{Config, app};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    app::router(demo_server(), &Config::default())
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

async fn mcp_call(message: Value) -> Value {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .header("mcp-protocol-version", "2025-06-18")
        .body(Body::from(message.to_string()))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_landing_page() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("FastMCP Edge Demo"));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_api_info() {
    let (status, body) = get_json("/api/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "FastMCP Edge Demo");
    assert_eq!(body["runtime"], "Cloudflare Workers");
    assert_eq!(
        body["features"],
        json!(["tools", "resources", "prompts", "custom-routes"])
    );
    assert_eq!(
        body["endpoints"],
        json!({"mcp": "/mcp", "health": "/health", "api": "/api/*"})
    );
}

#[tokio::test]
async fn test_api_time_in_zone() {
    let (status, body) = get_json("/api/time?tz=America/New_York").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timezone"], "America/New_York");
    assert!(body["time"].as_str().unwrap().contains(", "));
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_api_time_defaults_to_utc() {
    let (status, body) = get_json("/api/time").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timezone"], "UTC");
    assert!(body["time"].as_str().unwrap().ends_with(" UTC"));
}

#[tokio::test]
async fn test_api_time_zone_names_ignore_case() {
    let (status, body) = get_json("/api/time?tz=utc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timezone"], "utc");
    assert!(body["time"].as_str().unwrap().ends_with(" UTC"));

    let (status, body) = get_json("/api/time?tz=America/new_york").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timezone"], "America/new_york");
    let time = body["time"].as_str().unwrap();
    assert!(time.ends_with(" EDT") || time.ends_with(" EST"), "{time}");
}

#[tokio::test]
async fn test_api_time_labels_zone_by_offset() {
    let (status, body) = get_json("/api/time?tz=Asia/Tokyo").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["time"].as_str().unwrap().ends_with(" GMT+9"));
}

#[tokio::test]
async fn test_api_time_timestamps_do_not_go_backwards() {
    let (_, first) = get_json("/api/time?tz=UTC").await;
    let (_, second) = get_json("/api/time?tz=UTC").await;
    assert!(second["timestamp"].as_i64().unwrap() >= first["timestamp"].as_i64().unwrap());
}

#[tokio::test]
async fn test_api_time_rejects_unknown_zone() {
    let (status, body) = get_json("/api/time?tz=Not/AZone").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid timezone: Not/AZone"}));
}

#[tokio::test]
async fn test_api_time_rejects_empty_zone() {
    let (status, body) = get_json("/api/time?tz=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid timezone: "}));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get("/api/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mcp_tool_call() {
    let body = mcp_call(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": "greet", "arguments": {"name": "World"}}
    }))
    .await;
    assert_eq!(
        body["result"]["content"][0]["text"],
        "Hello, World! This greeting was served from the edge."
    );
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let body = mcp_call(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/list"
    }))
    .await;
    let names: Vec<&str> = body["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["echo", "get_datetime", "greet"]);
}

#[tokio::test]
async fn test_mcp_requires_protocol_version() {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
