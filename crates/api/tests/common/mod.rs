#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use showcase_api::config::ServerConfig;
use showcase_api::router::build_app_router;
use showcase_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        upload_dir,
        seed_sample_data: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_upload_dir(pool, std::env::temp_dir().join("showcase-test-uploads"))
}

/// Same as [`build_test_app`] with an explicit upload directory.
pub fn build_test_app_with_upload_dir(pool: PgPool, upload_dir: impl AsRef<Path>) -> Router {
    let config = test_config(upload_dir.as_ref().to_path_buf());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "----showcase-test-boundary";

/// Encode a single-file multipart body.
pub fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    post_raw(
        app,
        uri,
        &format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        body,
    )
    .await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A complete scenario body with every required field populated.
pub fn scenario_json(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "AI驱动的合同智能审核与风险预警系统",
        "businessProblem": "审批周期长达5-7天",
        "solution": "自动提取关键条款并标记风险点",
        "technicalDetails": "Python + SpaCy + FastAPI",
        "impact": "审批周期缩短至2天",
        "category": "自动化",
        "imageUrl": "https://images.example.com/contract.jpg",
        "team": "企业效率团队",
        "timeline": "4周",
        "metrics": ["a", "b"],
        "ownerName": "赵晴",
        "ownerAvatarUrl": "https://avatars.example.com/zq.svg",
        "requirementDocUrl": "https://docs.example.com/req",
        "githubRepoUrl": "",
    })
}

/// Create a scenario through the API and return its id.
pub async fn create_scenario(pool: &PgPool, title: &str) -> String {
    let response = post_json(build_test_app(pool.clone()), "/api/scenarios", scenario_json(title)).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}
