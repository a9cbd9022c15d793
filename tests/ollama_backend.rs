//! HTTP behavior of the Ollama backend
//!
//! Verifies the request shape and the mapping from transport outcomes to
//! the three error classes.

use semsql::{OllamaBackend, TranslateError, TranslationBackend};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_successful_reply_returns_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "test-model",
            "message": {"role": "assistant", "content": "{\"intent\": \"x\"}"},
            "done": true,
        })))
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri(), "test-model");
    let reply = backend.complete("prompt").await.unwrap();
    assert_eq!(reply, "{\"intent\": \"x\"}");
}

#[tokio::test]
async fn test_error_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri(), "test-model");
    let error = backend.complete("prompt").await.unwrap_err();
    match error {
        TranslateError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "model not loaded");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_body_maps_to_invalid_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let backend = OllamaBackend::new(server.uri(), "test-model");
    let error = backend.complete("prompt").await.unwrap_err();
    assert!(matches!(error, TranslateError::InvalidReply(_)));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_transport_error() {
    // Nothing listens on port 1
    let backend = OllamaBackend::new("http://127.0.0.1:1", "test-model");
    let error = backend.complete("prompt").await.unwrap_err();
    assert!(matches!(error, TranslateError::Transport(_)));
}

#[tokio::test]
async fn test_health_check_reports_reachability() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"models": []})))
        .mount(&server)
        .await;

    let healthy = OllamaBackend::new(server.uri(), "test-model");
    assert!(healthy.health_check().await);

    let unreachable = OllamaBackend::new("http://127.0.0.1:1", "test-model");
    assert!(!unreachable.health_check().await);
}
