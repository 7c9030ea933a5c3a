//! Storefront configuration (backend + CDN endpoints).

use std::time::Duration;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_CDN_URL: &str = "https://res.cloudinary.com/demo";
pub const DEFAULT_PRODUCTS_PATH: &str = "/product/getproducts";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the REST backend (no trailing slash required).
    pub api_url: String,
    /// Base URL of the image CDN.
    pub cdn_base_url: String,
    /// Path of the product collection endpoint, relative to `api_url`.
    pub products_path: String,
    /// CDN image id used when a product has no image.
    pub placeholder_image: String,
    pub timeout: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cdn_base_url: DEFAULT_CDN_URL.to_string(),
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl StorefrontConfig {
    /// Load from `STOREFRONT_*` environment variables, falling back to defaults.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup("STOREFRONT_API_URL") {
            Some(url) => config.api_url = url,
            None => tracing::warn!("STOREFRONT_API_URL not set; using {DEFAULT_API_URL}"),
        }
        match lookup("STOREFRONT_CDN_URL") {
            Some(url) => config.cdn_base_url = url,
            None => tracing::warn!("STOREFRONT_CDN_URL not set; using {DEFAULT_CDN_URL}"),
        }
        if let Some(path) = lookup("STOREFRONT_PRODUCTS_PATH") {
            config.products_path = path;
        }
        if let Some(image) = lookup("STOREFRONT_PLACEHOLDER_IMAGE") {
            config.placeholder_image = image;
        }
        if let Some(raw) = lookup("STOREFRONT_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                ClientError::Config(format!("STOREFRONT_TIMEOUT_SECS={raw:?}: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClientResult<()> {
        for (name, value) in [("api_url", &self.api_url), ("cdn_base_url", &self.cdn_base_url)] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ClientError::Config(format!(
                    "{name} must be an http(s) URL, got {value:?}"
                )));
            }
        }
        if !self.products_path.starts_with('/') {
            return Err(ClientError::Config(format!(
                "products_path must start with '/', got {:?}",
                self.products_path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("STOREFRONT_API_URL", "https://shop.example/api"),
            ("STOREFRONT_CDN_URL", "https://cdn.example"),
            ("STOREFRONT_PRODUCTS_PATH", "/product/all"),
            ("STOREFRONT_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://shop.example/api");
        assert_eq!(config.cdn_base_url, "https://cdn.example");
        assert_eq!(config.products_path, "/product/all");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_unparseable_timeout() {
        let err = StorefrontConfig::from_lookup(lookup(&[("STOREFRONT_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn rejects_non_http_api_url() {
        let err = StorefrontConfig::from_lookup(lookup(&[("STOREFRONT_API_URL", "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(msg) if msg.contains("api_url")));
    }
}
