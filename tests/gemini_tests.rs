use portfolio_chat::config::Config;
use portfolio_chat::message::RelayRequest;
use portfolio_chat::error::AppError;
use portfolio_chat::services::completion::{Completer, CompletionError};
use portfolio_chat::services::gemini::GeminiClient;
use portfolio_chat::state::AppState;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: Value,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn generate(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    upstream.seen.lock().unwrap().push((key, body));
    (upstream.status, Json(upstream.body.clone()))
}

/// Serve a fake Gemini endpoint on an ephemeral port.
async fn spawn_upstream(status: StatusCode, body: Value) -> (String, Upstream) {
    let upstream = Upstream { status, body, seen: Arc::new(Mutex::new(Vec::new())) };
    let app = Router::new()
        .route("/v1beta/models/test:generateContent", post(generate))
        .with_state(upstream.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1beta/models/test:generateContent"), upstream)
}

fn candidate(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }] })
}

#[tokio::test]
async fn test_candidate_text_returned_unchanged() {
    let text = "  Kamogelo builds *React* apps.\n\nAsk me more!  ";
    let (url, upstream) = spawn_upstream(StatusCode::OK, candidate(text)).await;
    let client = GeminiClient::new(url, "secret-key");

    let reply = client.complete("c\n\nUser question: m").await.unwrap();
    assert_eq!(reply, text);

    let seen = upstream.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (key, body) = &seen[0];
    assert_eq!(key.as_deref(), Some("secret-key"));
    assert_eq!(body["contents"][0]["parts"][0]["text"], "c\n\nUser question: m");
    let config = &body["generationConfig"];
    assert_eq!(config["temperature"].as_f64().map(|t| (t * 10.0).round()), Some(7.0));
    assert_eq!(config["topK"], 40);
    assert_eq!(config["topP"].as_f64().map(|p| (p * 100.0).round()), Some(95.0));
    assert_eq!(config["maxOutputTokens"], 1024);
}

#[tokio::test]
async fn test_non_success_status_is_upstream_error() {
    let (url, _upstream) =
        spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, json!({ "error": "busy" })).await;
    let client = GeminiClient::new(url, "k");

    match client.complete("p").await {
        Err(CompletionError::Upstream { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.contains("busy"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_parts_is_invalid_response() {
    let (url, _upstream) =
        spawn_upstream(StatusCode::OK, json!({ "candidates": [{ "content": {} }] })).await;
    let client = GeminiClient::new(url, "k");

    assert!(matches!(
        client.complete("p").await,
        Err(CompletionError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new(format!("http://{addr}/"), "k");
    assert!(matches!(client.complete("p").await, Err(CompletionError::Transport(_))));
}

#[tokio::test]
async fn test_relay_without_key_makes_no_outbound_call() {
    let (url, upstream) = spawn_upstream(StatusCode::OK, candidate("never")).await;
    let config = Config { api_key: None, api_url: url, ..Config::default() };
    let state = AppState::from_config(&config);

    let request = RelayRequest { message: "m".into(), context: "c".into() };
    assert_eq!(state.relay.handle(&request).await, Err(AppError::NotConfigured));
    assert!(upstream.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_relay_from_config_round_trip() {
    let (url, upstream) = spawn_upstream(StatusCode::OK, candidate("Hi there")).await;
    let config = Config { api_key: Some("k".into()), api_url: url, ..Config::default() };
    let state = AppState::from_config(&config);

    let request = RelayRequest { message: "m".into(), context: "c".into() };
    assert_eq!(state.relay.handle(&request).await.as_deref(), Ok("Hi there"));

    let seen = upstream.seen.lock().unwrap();
    assert_eq!(seen[0].1["contents"][0]["parts"][0]["text"], "c\n\nUser question: m");
}
