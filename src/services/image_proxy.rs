use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use url::Url;

const PROXY_USER_AGENT: &str = "Mozilla/5.0 (compatible; ImageProxy/1.0)";

/// Parse a URL and require an `http` or `https` scheme.
pub fn parse_http_url(raw: &str) -> Result<Url, ProxyError> {
    let url = Url::parse(raw).map_err(|_| ProxyError::InvalidUrl)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ProxyError::InvalidProtocol),
    }
}

/// An image fetched from upstream, ready to relay.
#[derive(Debug)]
pub struct ProxiedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fetches remote images for same-origin display.
pub struct ImageProxyClient {
    http: Client,
    max_bytes: usize,
}

impl ImageProxyClient {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, ProxyError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProxyError::Http)?;
        Ok(Self { http, max_bytes })
    }

    /// Fetch `url` and return its bytes if upstream says it is an image.
    pub async fn fetch(&self, url: &Url) -> Result<ProxiedImage, ProxyError> {
        let mut response = self
            .http
            .get(url.clone())
            .header(USER_AGENT, PROXY_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Upstream(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(ProxyError::NotAnImage);
        }

        if let Some(len) = response.content_length() {
            if usize::try_from(len).map_or(true, |len| len > self.max_bytes) {
                return Err(ProxyError::TooLarge(self.max_bytes));
            }
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if bytes.len() + chunk.len() > self.max_bytes {
                return Err(ProxyError::TooLarge(self.max_bytes));
            }
            bytes.extend_from_slice(&chunk);
        }

        match image::guess_format(&bytes) {
            Ok(format) => tracing::debug!(url = %url, ?format, "Proxied image format detected"),
            Err(_) => tracing::debug!(
                url = %url,
                content_type = %content_type,
                "Proxied image format not recognized"
            ),
        }

        Ok(ProxiedImage {
            content_type,
            bytes,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Unparseable URLs share the generic failure body with transport errors.
    #[error("Failed to proxy image")]
    InvalidUrl,

    #[error("Invalid protocol")]
    InvalidProtocol,

    #[error("Failed to fetch image")]
    Upstream(StatusCode),

    #[error("URL does not point to an image")]
    NotAnImage,

    #[error("Image exceeds {0} bytes")]
    TooLarge(usize),

    #[error("Failed to proxy image")]
    Http(#[from] reqwest::Error),
}

impl ProxyError {
    /// Short label used for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            ProxyError::InvalidUrl | ProxyError::InvalidProtocol => "rejected",
            ProxyError::Upstream(_) => "upstream_error",
            ProxyError::NotAnImage => "not_image",
            ProxyError::TooLarge(_) => "too_large",
            ProxyError::Http(_) => "transport_error",
        }
    }
}
