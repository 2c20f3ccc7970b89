use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::services::image_proxy::ProxyError;

/// Top-level API error shared by all route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Proxy(#[from] ProxyError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Proxy(e) => match e {
                ProxyError::InvalidProtocol | ProxyError::NotAnImage => StatusCode::BAD_REQUEST,
                ProxyError::Upstream(status) => *status,
                ProxyError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
                ProxyError::InvalidUrl | ProxyError::Http(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}
