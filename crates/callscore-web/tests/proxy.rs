//! Integration tests for the API proxy routes
//!
//! A wiremock server stands in for the evaluation backend; requests are
//! driven straight through the router.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use callscore_core::Config;
use callscore_web::build_app;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(backend_url: &str) -> Config {
    let mut config = Config::default();
    config.backend.base_url = backend_url.to_string();
    config.backend.poll_timeout_secs = 1;
    config
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_statistics_pass_through() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statistics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_records": 10,
            "evaluated_records": 7,
            "pending_evaluations": 3,
            "average_mark": 6.333,
            "marks_distribution": {"7": 4}
        })))
        .mount(&backend)
        .await;

    let app = build_app(test_config(&backend.uri()));
    let (status, body) = get(app, "/api/statistics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_records"], 10);
    assert_eq!(body["average_mark"], 6.333);
    assert_eq!(body["marks_distribution"]["7"], 4);
}

#[tokio::test]
async fn test_evaluations_pass_through() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/evaluations/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "status": "completed", "transcription": "привіт"},
            {"id": 2, "status": "processing"}
        ])))
        .mount(&backend)
        .await;

    let app = build_app(test_config(&backend.uri()));
    let (status, body) = get(app, "/api/evaluations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["id"], 1);
}

#[tokio::test]
async fn test_evaluation_not_found_passes_404_through() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/evaluation/7"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Record not found for ID: 7"})),
        )
        .mount(&backend)
        .await;

    let app = build_app(test_config(&backend.uri()));
    let (status, body) = get(app, "/api/evaluation/7").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Record not found for ID: 7");
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_bad_gateway() {
    // Port 9 (discard) is not listening
    let app = build_app(test_config("http://127.0.0.1:9"));
    let (status, body) = get(app, "/api/statistics").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_slow_backend_maps_to_gateway_timeout() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statistics/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&backend)
        .await;

    let app = build_app(test_config(&backend.uri()));
    let (status, body) = get(app, "/api/statistics").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["detail"], "upstream timeout");
}

fn multipart_upload_request(boundary: &str, payload: &str) -> Request<Body> {
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"call.mp3\"\r\n\
         Content-Type: audio/mp3\r\n\r\n\
         {payload}\r\n\
         --{boundary}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri("/api/transcribe")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_upload_forwards_file_and_passes_result_through() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transcribe/"))
        .and(body_string_contains("FAKEAUDIO"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 42, "status": "processing"})),
        )
        .mount(&backend)
        .await;

    let app = build_app(test_config(&backend.uri()));
    let response = app
        .oneshot(multipart_upload_request("test-boundary", "FAKEAUDIO"))
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 42);
    assert_eq!(body["status"], "processing");
}

#[tokio::test]
async fn test_upload_backend_rejection_passes_status_through() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transcribe/"))
        .respond_with(
            ResponseTemplate::new(415).set_body_json(json!({"detail": "Unsupported media type"})),
        )
        .mount(&backend)
        .await;

    let app = build_app(test_config(&backend.uri()));
    let response = app
        .oneshot(multipart_upload_request("test-boundary", "FAKEAUDIO"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_upload_without_file_field_is_rejected_locally() {
    let backend = MockServer::start().await;

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"other\"\r\n\r\n\
         value\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/transcribe")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let app = build_app(test_config(&backend.uri()));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(
        backend.received_requests().await.unwrap().is_empty(),
        "a request without a file must never reach the backend"
    );
}

#[tokio::test]
async fn test_health_check() {
    let app = build_app(test_config("http://127.0.0.1:9"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_index_serves_the_shell() {
    let app = build_app(test_config("http://127.0.0.1:9"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("callscore_web.js"));
}
