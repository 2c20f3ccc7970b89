use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000"). Unused by the worker.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Upstream timeout for the image proxy, in seconds
    #[serde(default = "default_proxy_timeout_secs")]
    pub image_proxy_timeout_secs: u64,

    /// Largest upstream image the proxy will relay
    #[serde(default = "default_proxy_max_bytes")]
    pub image_proxy_max_bytes: usize,

    /// Request body limit for inbound API calls
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_proxy_timeout_secs() -> u64 {
    15
}

fn default_proxy_max_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            image_proxy_timeout_secs: default_proxy_timeout_secs(),
            image_proxy_max_bytes: default_proxy_max_bytes(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Build from an explicit set of variables instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.image_proxy_timeout_secs, 15);
        assert_eq!(config.image_proxy_max_bytes, 20 * 1024 * 1024);
        assert_eq!(config.body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn test_overrides_from_vars() {
        let config = AppConfig::from_vars(vec![
            ("BIND_ADDR".to_string(), "127.0.0.1:8080".to_string()),
            ("IMAGE_PROXY_TIMEOUT_SECS".to_string(), "3".to_string()),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.image_proxy_timeout_secs, 3);
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        let result = AppConfig::from_vars(vec![(
            "IMAGE_PROXY_TIMEOUT_SECS".to_string(),
            "soon".to_string(),
        )]);
        assert!(result.is_err());
    }
}
