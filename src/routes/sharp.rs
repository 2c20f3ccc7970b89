use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;

use crate::error::ApiError;
use crate::models::scene::{SceneQuery, SceneResponse};
use crate::models::sharp::{SharpJobRequest, SharpJobResult, SharpJobStatus};
use crate::services::image_proxy::parse_http_url;
use crate::services::sharp::{cache_key, proxied_preview_url, run_sharp_job};

/// GET /api/sharp-scene — describe the 3D scene for an asset's hero image.
pub async fn get_scene(Query(query): Query<SceneQuery>) -> Result<impl IntoResponse, ApiError> {
    query
        .validate()
        .map_err(|_| ApiError::bad_request("Missing slug or imageUrl"))?;
    let (Some(slug), Some(image_url)) = (query.slug, query.image_url) else {
        return Err(ApiError::bad_request("Missing slug or imageUrl"));
    };

    parse_http_url(&image_url).map_err(|_| ApiError::bad_request("Invalid imageUrl"))?;

    let request = SharpJobRequest::for_image(slug, image_url);
    let result = execute(&request);

    let response = SceneResponse {
        status: result.status(),
        ply_url: result.ply_url().map(str::to_string),
        preview_image_url: result
            .preview_image_url()
            .map(str::to_string)
            .unwrap_or_else(|| proxied_preview_url(&request.image_url)),
        cache_key: cache_key(&request.slug, &request.image_hash),
        error: match result.status() {
            SharpJobStatus::Failed => result.error().map(str::to_string),
            _ => None,
        },
    };

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(response)))
}

/// POST /api/v1/sharp/jobs — submit a job request as JSON.
pub async fn submit_job(
    Json(request): Json<SharpJobRequest>,
) -> (StatusCode, Json<SharpJobResult>) {
    let result = execute(&request);
    let status = if result.is_pending() {
        StatusCode::ACCEPTED
    } else {
        StatusCode::OK
    };
    (status, Json(result))
}

fn execute(request: &SharpJobRequest) -> SharpJobResult {
    metrics::counter!("sharp_jobs_submitted_total").increment(1);

    let result = run_sharp_job(request);
    if result.is_pending() {
        metrics::counter!("sharp_jobs_pending_total").increment(1);
    }

    tracing::info!(
        slug = %request.slug,
        image_hash = %request.image_hash,
        status = %result.status(),
        "SHARP job evaluated"
    );

    result
}
