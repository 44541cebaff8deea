#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use flashcard_tools::{build_router, AppState, ServerConfig};

/// Server config pointed at a fake upstream, serving files from `static_dir`.
pub fn test_config(upstream: &str, static_dir: &Path) -> ServerConfig {
    ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        upstream_base: upstream.to_string(),
        static_dir: static_dir.to_path_buf(),
        upstream_timeout: Duration::from_secs(5),
        allowed_origins: Vec::new(),
    }
}

pub fn build_test_app(config: ServerConfig) -> Router {
    build_router(AppState::new(config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse { status, headers, body }
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
