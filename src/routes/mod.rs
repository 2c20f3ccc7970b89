pub mod health;
pub mod image_proxy;
pub mod metrics;
pub mod sharp;

use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the API router, including the `/metrics` scrape endpoint backed by
/// `prometheus`.
pub fn router(
    state: AppState,
    prometheus: Arc<PrometheusHandle>,
    body_limit_bytes: usize,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/sharp-scene", get(sharp::get_scene))
        .route("/api/v1/sharp/jobs", post(sharp::submit_job))
        .route("/api/image-proxy", get(image_proxy::proxy_image))
        .with_state(state)
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(prometheus),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
}
