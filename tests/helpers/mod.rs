//! Test helper utilities for driving the router in-process

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::routing;
use axum::Router;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sharp_scene::app_state::AppState;
use sharp_scene::config::AppConfig;
use sharp_scene::routes;
use std::sync::Arc;
use tower::ServiceExt;

use crate::fixtures::PNG_BYTES;

/// Response captured from a single request.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// Router with default configuration.
pub fn test_app() -> Router {
    test_app_with(AppConfig::default())
}

pub fn test_app_with(config: AppConfig) -> Router {
    let recorder = PrometheusBuilder::new().build_recorder();
    test_app_with_metrics(config, recorder.handle())
}

/// Router whose `/metrics` renders from `handle`.
pub fn test_app_with_metrics(config: AppConfig, handle: PrometheusHandle) -> Router {
    let state = AppState::from_config(&config).expect("Failed to build app state");
    routes::router(state, Arc::new(handle), config.body_limit_bytes)
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("router call failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Start a local upstream serving a small PNG, an HTML page, a 404 and a
/// 4 KiB "image". Returns its base URL.
pub async fn spawn_upstream() -> String {
    let upstream = Router::new()
        .route(
            "/hero.png",
            routing::get(|| async { ([(header::CONTENT_TYPE, "image/png")], PNG_BYTES) }),
        )
        .route(
            "/page.html",
            routing::get(|| async { ([(header::CONTENT_TYPE, "text/html")], "<html></html>") }),
        )
        .route(
            "/missing.png",
            routing::get(|| async { (StatusCode::NOT_FOUND, "gone") }),
        )
        .route(
            "/large.png",
            routing::get(|| async { ([(header::CONTENT_TYPE, "image/png")], vec![0u8; 4096]) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
