use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Lifecycle label of a SHARP reconstruction job.
///
/// Only `Pending` is produced today; the other variants are reserved for the
/// inference path.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SharpJobStatus {
    Pending,
    Succeeded,
    Failed,
}

/// A unit of SHARP work: one source image for one asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharpJobRequest {
    pub slug: String,
    pub image_url: String,
    pub image_hash: String,
}

impl SharpJobRequest {
    pub fn new(
        slug: impl Into<String>,
        image_url: impl Into<String>,
        image_hash: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            image_url: image_url.into(),
            image_hash: image_hash.into(),
        }
    }
}

/// Outcome of a SHARP job.
///
/// Fields are private so the status/field combinations can only be built
/// through the constructors below. Deserialization goes through the same
/// status/field checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawSharpJobResult")]
pub struct SharpJobResult {
    status: SharpJobStatus,
    ply_url: Option<String>,
    preview_image_url: Option<String>,
    error: Option<String>,
}

impl SharpJobResult {
    /// Accepted but not executed. Carries the reason it has not run.
    pub fn pending(reason: impl Into<String>) -> Self {
        Self {
            status: SharpJobStatus::Pending,
            ply_url: None,
            preview_image_url: None,
            error: Some(reason.into()),
        }
    }

    pub fn succeeded(ply_url: impl Into<String>, preview_image_url: impl Into<String>) -> Self {
        Self {
            status: SharpJobStatus::Succeeded,
            ply_url: Some(ply_url.into()),
            preview_image_url: Some(preview_image_url.into()),
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: SharpJobStatus::Failed,
            ply_url: None,
            preview_image_url: None,
            error: Some(reason.into()),
        }
    }

    pub fn status(&self) -> SharpJobStatus {
        self.status
    }

    pub fn ply_url(&self) -> Option<&str> {
        self.ply_url.as_deref()
    }

    pub fn preview_image_url(&self) -> Option<&str> {
        self.preview_image_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == SharpJobStatus::Pending
    }
}

/// Wire shape of a result before its status/field combination is checked.
#[derive(Deserialize)]
struct RawSharpJobResult {
    status: SharpJobStatus,
    #[serde(default)]
    ply_url: Option<String>,
    #[serde(default)]
    preview_image_url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawSharpJobResult> for SharpJobResult {
    type Error = String;

    fn try_from(raw: RawSharpJobResult) -> Result<Self, Self::Error> {
        match (raw.status, raw.ply_url, raw.preview_image_url, raw.error) {
            (SharpJobStatus::Pending, None, None, Some(reason)) => Ok(Self::pending(reason)),
            (SharpJobStatus::Failed, None, None, Some(reason)) => Ok(Self::failed(reason)),
            (SharpJobStatus::Succeeded, Some(ply), Some(preview), None) => {
                Ok(Self::succeeded(ply, preview))
            }
            (status, ..) => Err(format!(
                "invalid field combination for a {} result",
                status
            )),
        }
    }
}
