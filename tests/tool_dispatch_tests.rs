//! Integration tests for the catalog tools against a mock Admin API.
//!
//! Every test points a real `RestConnector` at a `wiremock` server through
//! `SHOPIFY_API_HOST`, so requests go through the full session, HTTP and
//! REST resource stack.

use std::time::Duration;

use serde_json::{json, Value};
use shopify_mcp::catalog::{PageWalker, RestConnector};
use shopify_mcp::tools::{ToolDispatcher, ToolResponse};
use shopify_mcp::ServerSettings;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCTS: &str = "/admin/api/2025-01/products.json";

fn dispatcher(server: &MockServer) -> ToolDispatcher {
    let settings = ServerSettings {
        shop_url: "test-shop".to_string(),
        admin_access_token: "shpat_test".to_string(),
        api_host: Some(server.uri()),
        ..Default::default()
    };
    ToolDispatcher::new(RestConnector::new(settings))
        .with_walker(PageWalker::default().with_pacing(Duration::ZERO))
}

fn product(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "vendor": "Acme",
        "product_type": "Shirts",
        "created_at": "2024-01-02T09:28:43-05:00",
        "updated_at": "2024-01-02T09:28:43-05:00",
        "status": "active",
        "variants": [{"id": id * 10, "price": "9.99", "sku": "ABC"}],
        "options": [],
        "images": []
    })
}

fn next_link(server: &MockServer, cursor: &str) -> String {
    format!(r#"<{}{PRODUCTS}?limit=250&page_info={cursor}>; rel="next""#, server.uri())
}

fn success(response: &ToolResponse) -> Value {
    assert!(!response.is_error, "unexpected error: {response:?}");
    serde_json::from_str(response.content[0].as_text()).unwrap()
}

// ============================================================================
// list_products
// ============================================================================

#[tokio::test]
async fn test_list_products_follows_link_header_and_stops_at_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(query_param("limit", "3"))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&server, "page2").as_str())
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "1/40")
                .set_body_json(json!({"products": [product(1), product(2)]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(query_param("limit", "1"))
        .and(query_param("page_info", "page2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&server, "page3").as_str())
                .set_body_json(json!({"products": [product(3)]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call("list_products", json!({"limit": 3}))
        .await;

    let listed = success(&response);
    let ids: Vec<u64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(listed[0]["variants_count"], 1);
    assert_eq!(listed[0]["created_at"], "2024-01-02T09:28:43-05:00");
}

#[tokio::test]
async fn test_list_products_keeps_products_with_unknown_status() {
    let server = MockServer::start().await;

    let mut unlisted = product(2);
    unlisted["status"] = json!("unlisted");

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": [product(1), unlisted, product(3)]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call("list_products", json!({"limit": 10}))
        .await;

    let listed = success(&response);
    assert_eq!(listed.as_array().unwrap().len(), 3);
    assert_eq!(listed[0]["status"], "active");
    assert_eq!(listed[1]["id"], 2);
    assert!(listed[1]["status"].is_null());
}

#[tokio::test]
async fn test_list_products_returns_partial_listing_when_a_page_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&server, "page2").as_str())
                .set_body_json(json!({"products": [product(1), product(2)]})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(PRODUCTS))
        .and(query_param("page_info", "page2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{\"errors\":\"boom\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call("list_products", json!({"limit": 10}))
        .await;

    assert_eq!(success(&response).as_array().unwrap().len(), 2);
}

// ============================================================================
// get_product / delete_product
// ============================================================================

#[tokio::test]
async fn test_get_product_not_found_is_error_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-01/products/404.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call("get_product", json!({"product_id": 404}))
        .await;

    assert!(response.is_error);
    assert_eq!(response.content.len(), 1);
    assert_eq!(
        response.content[0].as_text(),
        "An error occurred: Product with id 404 not found"
    );
}

#[tokio::test]
async fn test_delete_product_fetches_title_then_deletes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-01/products/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"product": product(7)})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-01/products/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call("delete_product", json!({"product_id": 7}))
        .await;

    assert_eq!(
        success(&response),
        json!({"success": true, "message": "Product 'Product 7' has been deleted"})
    );
}

// ============================================================================
// create_product / update_product
// ============================================================================

#[tokio::test]
async fn test_create_product_posts_new_product() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRODUCTS))
        .and(body_partial_json(json!({
            "product": {
                "title": "Summer Shirt",
                "status": "draft",
                "options": [{"name": "Size", "position": 1, "values": ["S", "M"]}],
                "variants": [{"price": "19.99", "option1": "S"}],
                "images": [{"src": "https://cdn.shopify.com/shirt.png"}]
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {"id": 1001, "title": "Summer Shirt"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call(
            "create_product",
            json!({
                "title": "Summer Shirt",
                "status": "draft",
                "options": [{"name": "Size", "values": ["S", "M"]}],
                "variants": [{"price": "19.99", "option1": "S"}],
                "images": [{"src": "https://cdn.shopify.com/shirt.png"}]
            }),
        )
        .await;

    assert_eq!(
        success(&response),
        json!({
            "success": true,
            "product_id": 1001,
            "message": "Product 'Summer Shirt' has been created"
        })
    );
}

#[tokio::test]
async fn test_create_product_validation_failure_is_error_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRODUCTS))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}})),
        )
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call("create_product", json!({"title": " "}))
        .await;

    assert!(response.is_error);
    assert_eq!(
        response.content[0].as_text(),
        "An error occurred: Validation failed: title can't be blank"
    );
}

#[tokio::test]
async fn test_update_product_sends_merged_product() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2025-01/products/7.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"product": product(7)})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-01/products/7.json"))
        .and(body_partial_json(json!({
            "product": {
                "id": 7,
                "title": "Renamed",
                "vendor": "Acme",
                "variants": [
                    {"id": 70, "price": "19.99", "sku": "ABC"},
                    {"price": "5.00", "sku": "NEW", "product_id": 7}
                ]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 7, "title": "Renamed"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = dispatcher(&server)
        .call(
            "update_product",
            json!({
                "product_id": "7",
                "title": "Renamed",
                "variants": [
                    {"id": 70, "price": "19.99"},
                    {"price": "5.00", "sku": "NEW"},
                    {"id": 999, "price": "1.00"}
                ]
            }),
        )
        .await;

    assert_eq!(
        success(&response),
        json!({
            "success": true,
            "product_id": 7,
            "message": "Product 'Renamed' has been updated"
        })
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_missing_credentials_fail_per_call() {
    let dispatcher = ToolDispatcher::new(RestConnector::new(ServerSettings::default()));

    let response = dispatcher
        .call("get_product", json!({"product_id": 1}))
        .await;

    assert!(response.is_error);
    assert!(response.content[0]
        .as_text()
        .starts_with("An error occurred: Missing required field: 'access_token'"));
}
