//! Integration tests for the clique-viz HTTP service.
//!
//! A throwaway solver is started on a local port so the upload proxy can be
//! exercised end to end.
//!
//! Run with: `cargo test --package clique-viz-api --test api_integration`

use std::fs;

use axum::{
    body::{Body, Bytes},
    extract::DefaultBodyLimit,
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use clique_viz_core::ResultPayload;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tower::ServiceExt;

use clique_viz_api::{create_api_router, create_api_state, ApiConfig};

const BOUNDARY: &str = "cliquevizboundary";

/// Start a fake solver answering on `/upload`; returns its URL.
async fn spawn_solver() -> String {
    async fn solve(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
        let is_multipart = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));
        let text = String::from_utf8_lossy(&body);

        if !is_multipart || !text.contains(r#"name="graph""#) {
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({"error": "No file uploaded"})),
            );
        }
        if text.contains("broken") {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({"sat": false, "clique": [], "message": "Solver error (exit 1)"})),
            );
        }
        (
            StatusCode::OK,
            axum::Json(json!({"sat": true, "edges": [[1,2],[2,3],[1,3]], "clique": [1,2,3]})),
        )
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/upload", post(solve))
        .layer(DefaultBodyLimit::disable());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/upload", addr)
}

/// A URL nothing listens on.
async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/upload", addr)
}

fn create_test_router(config: &ApiConfig) -> Router {
    create_api_router(create_api_state(config), config)
}

fn multipart_body(contents: &str) -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"graph\"; filename=\"graph.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    )
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn upload(router: &Router, contents: &str) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(contents)))
        .unwrap();
    send(router, request).await
}

// =============================================================================
// Shell and health
// =============================================================================

#[tokio::test]
async fn test_health_reports_solver() {
    let config = ApiConfig::new("http://solver.invalid/upload");
    let router = create_test_router(&config);

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["solver"], "http://solver.invalid/upload");
    assert!(json["timestamp"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_index_has_both_panels() {
    let router = create_test_router(&ApiConfig::new("http://solver.invalid/upload"));

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body.to_vec()).unwrap();
    for id in ["uploadPane", "resultPane", "answer", "viz", "again"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
    assert!(html.contains("clique_viz_web.js"));
}

#[tokio::test]
async fn test_assets_served_from_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("clique_viz_web.js"), "export default function init() {}").unwrap();

    let config = ApiConfig::new("http://solver.invalid/upload").with_assets_dir(temp.path());
    let router = create_test_router(&config);

    let (status, body) = get(&router, "/pkg/clique_viz_web.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("init"));

    let (status, _) = get(&router, "/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assets_absent_without_dir() {
    let router = create_test_router(&ApiConfig::new("http://solver.invalid/upload"));
    let (status, _) = get(&router, "/pkg/clique_viz_web.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Upload proxy
// =============================================================================

#[tokio::test]
async fn test_upload_relays_solver_result() {
    let config = ApiConfig::new(spawn_solver().await);
    let router = create_test_router(&config);

    let (status, body) = upload(&router, "3 3 3\n1 2\n2 3\n1 3\n").await;
    assert_eq!(status, StatusCode::OK);

    let payload = ResultPayload::from_slice(&body).unwrap();
    assert!(payload.sat);
    assert_eq!(payload.edges.len(), 3);
    assert_eq!(payload.answer_text(), "Clique: 1 2 3");
}

#[tokio::test]
async fn test_upload_larger_than_two_megabytes_reaches_solver() {
    let config = ApiConfig::new(spawn_solver().await);
    let router = create_test_router(&config);

    let mut contents = String::from("300000 300000 3\n");
    for _ in 0..300_000 {
        contents.push_str("1 2\n");
    }
    assert!(contents.len() > 2 * 1024 * 1024);

    let (status, body) = upload(&router, &contents).await;
    assert_eq!(status, StatusCode::OK);
    assert!(ResultPayload::from_slice(&body).unwrap().sat);
}

#[tokio::test]
async fn test_upload_relays_solver_failure_status() {
    let config = ApiConfig::new(spawn_solver().await);
    let router = create_test_router(&config);

    let (status, body) = upload(&router, "broken").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let payload = ResultPayload::from_slice(&body).unwrap();
    assert!(!payload.sat);
    assert_eq!(payload.message.as_deref(), Some("Solver error (exit 1)"));
    assert_eq!(payload.answer_text(), "UNSAT");
}

#[tokio::test]
async fn test_upload_requires_multipart() {
    let config = ApiConfig::new(spawn_solver().await);
    let router = create_test_router(&config);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header("Content-Type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["code"], "NOT_MULTIPART");
}

#[tokio::test]
async fn test_upload_with_solver_down_is_bad_gateway() {
    let config = ApiConfig::new(dead_url().await);
    let router = create_test_router(&config);

    let (status, body) = upload(&router, "2 1 2\n1 2\n").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["code"], "SOLVER_UNREACHABLE");
}

#[tokio::test]
async fn test_get_upload_not_allowed() {
    let router = create_test_router(&ApiConfig::new("http://solver.invalid/upload"));
    let (status, _) = get(&router, "/upload").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
