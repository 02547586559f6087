use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use sol2clarity::cli::Args;
use sol2clarity::server::api::{build_state, router};

fn test_args() -> Args {
    Args {
        port: 5000,
        enable_tls: false,
        tls_cert_path: None,
        tls_key_path: None,
        api_key: None,
        upstream_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
        model: "llama3-8b-8192".to_string(),
        temperature: 0.2,
        max_tokens: 4000,
    }
}

fn test_router() -> axum::Router {
    router(build_state(&test_args()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = test_router().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn convert_without_source_code_is_bad_request() {
    let response = test_router()
        .oneshot(post_json("/api/convert", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No Solidity code provided");
}

#[tokio::test]
async fn convert_with_blank_source_code_is_bad_request() {
    let response = test_router()
        .oneshot(post_json("/api/convert", json!({ "sourceCode": "   " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn convert_without_api_key_is_server_error() {
    let response = test_router()
        .oneshot(post_json(
            "/api/convert",
            json!({ "sourceCode": "contract Token {}" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Groq API key is not configured");
}

#[tokio::test]
async fn explain_without_code_is_bad_request() {
    let response = test_router()
        .oneshot(post_json("/api/explain", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No Clarity code provided");
}

#[tokio::test]
async fn test_upstream_without_api_key_is_server_error() {
    let response = test_router()
        .oneshot(get("/api/test-upstream"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Groq API key is not configured");
}

#[tokio::test]
async fn deploy_returns_wellformed_identifiers() {
    let response = test_router()
        .oneshot(post_json("/api/deploy", json!({ "code": "(ok true)" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let tx_id = body["txId"].as_str().unwrap();
    let address = body["address"].as_str().unwrap();

    assert_eq!(tx_id.len(), 64);
    assert!(tx_id.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(address.starts_with("ST"));
    assert_eq!(
        body["contractId"].as_str().unwrap(),
        format!("{}.converted-contract", address)
    );
    assert_eq!(body["network"], "testnet");
}

#[tokio::test]
async fn deploy_ids_differ_across_calls() {
    let request_body = json!({ "code": "(ok true)" });

    let first = body_json(
        test_router()
            .oneshot(post_json("/api/deploy", request_body.clone()))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        test_router()
            .oneshot(post_json("/api/deploy", request_body))
            .await
            .unwrap(),
    )
    .await;

    assert_ne!(first["txId"], second["txId"]);
}

#[tokio::test]
async fn deploy_accepts_name_and_network() {
    let response = test_router()
        .oneshot(post_json(
            "/api/deploy",
            json!({ "code": "(ok true)", "name": "my-nft", "network": "mainnet" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["network"], "mainnet");
    assert!(body["contractId"].as_str().unwrap().ends_with(".my-nft"));
}

#[tokio::test]
async fn deploy_without_code_is_bad_request() {
    let response = test_router()
        .oneshot(post_json("/api/deploy", json!({ "network": "testnet" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deploy_rejects_unknown_network() {
    let response = test_router()
        .oneshot(post_json(
            "/api/deploy",
            json!({ "code": "(ok true)", "network": "devnet" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("devnet"));
}
