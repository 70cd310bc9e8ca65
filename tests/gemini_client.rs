//! Gemini client behavior against a local stub endpoint

use std::net::SocketAddr;

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::{Value, json};
use tripplanner::config::GeminiConfig;
use tripplanner::{GeminiClient, TextGenerator, TripPlannerError};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> GeminiClient {
    GeminiClient::new(&GeminiConfig {
        api_key: Some("test_key_12345".to_string()),
        base_url: format!("http://{addr}"),
        model: "gemini-1.5-flash".to_string(),
        timeout_seconds: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_success_returns_first_part_verbatim() {
    let app = Router::new().route(
        "/models/{model}",
        post(|| async {
            Json(json!({
                "candidates": [{
                    "content": {"parts": [
                        {"text": "  Day 1: arrive.\n"},
                        {"text": "ignored second part"}
                    ]}
                }]
            }))
        }),
    );
    let client = client_for(serve(app).await);

    let text = client.generate("plan something").await.unwrap();
    // Verbatim: no trimming, second part ignored
    assert_eq!(text, "  Day 1: arrive.\n");
}

#[tokio::test]
async fn test_request_envelope_carries_prompt() {
    // Echo the prompt found at the documented request path back as the
    // generated text.
    let app = Router::new().route(
        "/models/{model}",
        post(|Json(body): Json<Value>| async move {
            let prompt = body["contents"][0]["parts"][0]["text"]
                .as_str()
                .unwrap_or("ENVELOPE MISMATCH")
                .to_string();
            Json(json!({
                "candidates": [{"content": {"parts": [{"text": prompt}]}}]
            }))
        }),
    );
    let client = client_for(serve(app).await);

    let text = client.generate("the exact prompt").await.unwrap();
    assert_eq!(text, "the exact prompt");
}

#[tokio::test]
async fn test_non_success_exposes_status_and_body() {
    let app = Router::new().route(
        "/models/{model}",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "server error").into_response() }),
    );
    let client = client_for(serve(app).await);

    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, TripPlannerError::Api { .. }));
    let message = err.to_string();
    assert!(message.contains("500"), "missing status in: {message}");
    assert!(message.contains("server error"), "missing body in: {message}");
}

#[tokio::test]
async fn test_missing_candidates_is_parse_failure() {
    let app = Router::new().route(
        "/models/{model}",
        post(|| async { Json(json!({"candidates": []})) }),
    );
    let client = client_for(serve(app).await);

    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, TripPlannerError::Parse { .. }));
}

#[tokio::test]
async fn test_non_json_success_body_is_parse_failure() {
    let app = Router::new().route(
        "/models/{model}",
        post(|| async { "plain text, not the envelope" }),
    );
    let client = client_for(serve(app).await);

    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, TripPlannerError::Parse { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop the listener so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, TripPlannerError::Api { .. }));
}
