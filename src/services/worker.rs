use crate::models::sharp::{SharpJobRequest, SharpJobResult};
use crate::services::sharp::run_sharp_job;

/// Answer one line of worker input.
///
/// Returns `None` for blank lines. A line that is not a valid request yields
/// a failed result instead of stopping the worker.
pub fn handle_line(line: &str) -> Option<SharpJobResult> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let result = match serde_json::from_str::<SharpJobRequest>(line) {
        Ok(request) => {
            tracing::info!(
                slug = %request.slug,
                image_hash = %request.image_hash,
                "Processing SHARP job"
            );
            let result = run_sharp_job(&request);
            tracing::info!(slug = %request.slug, status = %result.status(), "SHARP job finished");
            result
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected malformed job request");
            SharpJobResult::failed(format!("Invalid job request: {}", e))
        }
    };

    Some(result)
}
