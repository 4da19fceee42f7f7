//! Tests for the HTTP client module

use super::*;
use base64::Engine as _;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_basic_auth_header_is_attached() {
    let mock_server = MockServer::start().await;
    let expected = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("secret-key")
    );

    Mock::given(method("GET"))
        .and(path("/countries"))
        .and(header("Authorization", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PrintfulClient::with_base_url("secret-key", mock_server.uri()).unwrap();
    let response = client.get("countries").await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": [{"code": "US", "name": "United States"}]
        })))
        .mount(&mock_server)
        .await;

    let client = PrintfulClient::with_base_url("key", mock_server.uri()).unwrap();
    let body: serde_json::Value = client.get_json("countries").await.unwrap();

    assert_eq!(body["result"][0]["code"], "US");
}

#[tokio::test]
async fn test_non_2xx_maps_to_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sync/products"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = PrintfulClient::with_base_url("bad-key", mock_server.uri()).unwrap();
    let err = client.get("sync/products").await.unwrap_err();

    match err {
        crate::error::Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PrintfulClient::with_base_url("key", mock_server.uri()).unwrap();
    assert!(client.get("countries").await.is_err());
}

#[test]
fn test_build_url_handles_slashes() {
    let client = PrintfulClient::with_base_url("key", "http://localhost:1234/").unwrap();
    assert_eq!(
        client.build_url("/sync/products"),
        "http://localhost:1234/sync/products"
    );
    assert_eq!(
        client.build_url("countries"),
        "http://localhost:1234/countries"
    );
}

#[test]
fn test_any_key_encodes_to_a_valid_header() {
    // base64 output is always header-safe, even for keys containing
    // control characters.
    assert!(PrintfulClient::new("key\nwith-newline").is_ok());
    assert!(PrintfulClient::new("").is_ok());
}
