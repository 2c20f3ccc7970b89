use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::services::image_proxy::{ImageProxyClient, ProxyError};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ImageProxyClient>,
}

impl AppState {
    pub fn new(proxy: ImageProxyClient) -> Self {
        Self {
            proxy: Arc::new(proxy),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ProxyError> {
        let proxy = ImageProxyClient::new(
            Duration::from_secs(config.image_proxy_timeout_secs),
            config.image_proxy_max_bytes,
        )?;
        Ok(Self::new(proxy))
    }
}
