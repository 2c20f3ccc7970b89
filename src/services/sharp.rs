use sha2::{Digest, Sha256};

use crate::models::sharp::{SharpJobRequest, SharpJobResult};

/// Reason attached to every job until the GPU worker exists.
pub const WORKER_NOT_IMPLEMENTED: &str = "Modal worker not yet implemented";

/// Hex characters of the SHA-256 digest kept in an image hash.
const IMAGE_HASH_LEN: usize = 16;

/// Path of the image proxy route used for preview images.
pub const IMAGE_PROXY_PATH: &str = "/api/image-proxy";

/// Run a SHARP job.
///
/// Intended flow, not wired yet: download `image_url`, run SHARP inference,
/// upload the `.ply` and preview to storage, return their public URLs. Until
/// then every request is answered with a pending result and no I/O happens.
pub fn run_sharp_job(_request: &SharpJobRequest) -> SharpJobResult {
    SharpJobResult::pending(WORKER_NOT_IMPLEMENTED)
}

/// Short content key for an image URL: first 16 hex chars of its SHA-256.
pub fn hash_image_url(image_url: &str) -> String {
    let digest = Sha256::digest(image_url.as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(IMAGE_HASH_LEN);
    hash
}

pub fn cache_key(slug: &str, image_hash: &str) -> String {
    format!("{}:{}", slug, image_hash)
}

/// Same-origin preview URL that routes the source image through the proxy.
pub fn proxied_preview_url(image_url: &str) -> String {
    format!("{}?url={}", IMAGE_PROXY_PATH, urlencoding::encode(image_url))
}

impl SharpJobRequest {
    /// Build a request whose hash is derived from the image URL.
    pub fn for_image(slug: impl Into<String>, image_url: impl Into<String>) -> Self {
        let image_url = image_url.into();
        let image_hash = hash_image_url(&image_url);
        Self::new(slug, image_url, image_hash)
    }
}
