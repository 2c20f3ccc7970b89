use axum::extract::State;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// GET /metrics — Prometheus text exposition of job and proxy counters.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}

/// Register descriptions for every metric the service emits.
pub fn describe_metrics() {
    metrics::describe_counter!(
        "sharp_jobs_submitted_total",
        "Total SHARP job requests evaluated"
    );
    metrics::describe_counter!(
        "sharp_jobs_pending_total",
        "SHARP job requests answered as pending"
    );
    metrics::describe_counter!(
        "image_proxy_requests_total",
        "Image proxy requests by outcome"
    );
    metrics::describe_histogram!(
        "image_proxy_fetch_seconds",
        "Time spent fetching upstream images"
    );
}
