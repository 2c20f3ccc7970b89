use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::models::sharp::SharpJobStatus;

/// Query string of `GET /api/sharp-scene`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SceneQuery {
    #[garde(required, length(min = 1))]
    pub slug: Option<String>,

    #[garde(required, length(min = 1))]
    pub image_url: Option<String>,

    /// Accepted for client compatibility; has no effect.
    #[garde(skip)]
    pub demo: Option<String>,
}

/// Scene descriptor returned to the viewer, which polls while `status` is pending.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneResponse {
    pub status: SharpJobStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ply_url: Option<String>,

    pub preview_image_url: String,

    pub cache_key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query string of `GET /api/image-proxy`.
#[derive(Debug, Deserialize)]
pub struct ImageProxyQuery {
    pub url: Option<String>,
}
