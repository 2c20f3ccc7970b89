use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::scene::ImageProxyQuery;
use crate::services::image_proxy::parse_http_url;

/// GET /api/image-proxy — relay a remote image from our own origin.
pub async fn proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ImageProxyQuery>,
) -> Result<Response, ApiError> {
    let raw = match query.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            metrics::counter!("image_proxy_requests_total", "outcome" => "rejected").increment(1);
            return Err(ApiError::bad_request("Missing url parameter"));
        }
    };

    let url = match parse_http_url(raw) {
        Ok(url) => url,
        Err(e) => {
            metrics::counter!("image_proxy_requests_total", "outcome" => e.outcome()).increment(1);
            return Err(e.into());
        }
    };

    let start = std::time::Instant::now();
    let fetched = state.proxy.fetch(&url).await;
    metrics::histogram!("image_proxy_fetch_seconds").record(start.elapsed().as_secs_f64());

    match fetched {
        Ok(image) => {
            metrics::counter!("image_proxy_requests_total", "outcome" => "ok").increment(1);
            tracing::debug!(url = %url, bytes = image.bytes.len(), "Image proxied");
            Ok((
                [
                    (header::CONTENT_TYPE, image.content_type),
                    (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
                ],
                image.bytes,
            )
                .into_response())
        }
        Err(e) => {
            metrics::counter!("image_proxy_requests_total", "outcome" => e.outcome()).increment(1);
            tracing::error!(url = %url, error = ?e, "Image proxy error");
            Err(e.into())
        }
    }
}
