//! Tests for the HTTP transport routes, backed by a mock Admin API.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use shopify_mcp::catalog::{PageWalker, RestConnector};
use shopify_mcp::tools::ToolDispatcher;
use shopify_mcp::ServerSettings;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(server: &MockServer) -> axum::Router {
    let settings = ServerSettings {
        shop_url: "test-shop".to_string(),
        admin_access_token: "shpat_test".to_string(),
        api_host: Some(server.uri()),
        ..Default::default()
    };
    let dispatcher = ToolDispatcher::new(RestConnector::new(settings))
        .with_walker(PageWalker::default().with_pacing(Duration::ZERO));
    shopify_mcp::http::router(dispatcher)
}

async fn post(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_call_tool_lists_products() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-01/products.json"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {"id": 1, "title": "Hat", "variants": [{"id": 11}, {"id": 12}], "images": []},
                {"id": 2, "title": "Scarf", "variants": [], "images": [{"id": 21, "src": "https://cdn.shopify.com/s.png"}]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post(app(&server), "/mcp/call_tool", json!({"name": "list_products"})).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["result"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "text");
    let listed: Value = serde_json::from_str(items[0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(listed[0]["variants_count"], 2);
    assert_eq!(listed[1]["images_count"], 1);
    assert!(listed[1]["vendor"].is_null());
}

#[tokio::test]
async fn test_call_tool_without_name_is_bad_request() {
    let server = MockServer::start().await;

    let (status, body) = post(app(&server), "/mcp/call_tool", json!({"arguments": {"limit": 1}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Tool name is required"}));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_tools_route() {
    let server = MockServer::start().await;

    let (status, body) = post(app(&server), "/mcp/list_tools", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["list_products", "get_product", "create_product", "update_product", "delete_product"]
    );
}
