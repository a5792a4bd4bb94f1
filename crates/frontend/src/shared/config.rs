//! Application configuration.
//!
//! The defaults live in `config.toml` next to `Cargo.toml` and are compiled
//! into the bundle. A build-time `API_BASE_URL` environment variable replaces
//! `api.base_url`, which is how deployments point the console at their backend.

use anyhow::{bail, Context};
use leptos::prelude::*;
use serde::Deserialize;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    pub token_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Page sizes per screen.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
    pub objects: usize,
    pub units: usize,
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    pub orders: usize,
    pub orders_fetch: usize,
    pub lookup_fetch: usize,
}

impl PaginationConfig {
    fn validate(&self) -> anyhow::Result<()> {
        let sizes = [
            ("objects", self.objects),
            ("units", self.units),
            ("categories", self.categories),
            ("products", self.products),
            ("users", self.users),
            ("orders", self.orders),
            ("orders_fetch", self.orders_fetch),
            ("lookup_fetch", self.lookup_fetch),
        ];
        for (name, size) in sizes {
            if size == 0 {
                bail!("pagination.{} must be greater than zero", name);
            }
        }
        Ok(())
    }
}

impl ApiConfig {
    /// Configured base URL, or the page origin when none is configured.
    pub fn resolved_base_url(&self) -> String {
        if self.base_url.is_empty() {
            page_origin()
        } else {
            self.base_url.clone()
        }
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Trailing slashes are dropped so paths can always start with `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// The configuration provided by `App`.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found")
}

/// Load the embedded configuration with the build-time override applied.
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG, option_env!("API_BASE_URL"))
}

pub fn parse_config(source: &str, base_url_override: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(source).context("invalid config.toml")?;

    if let Some(url) = base_url_override.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.to_string();
    }
    config.api.base_url = normalize_base_url(&config.api.base_url);

    if config.api.token_key.trim().is_empty() {
        bail!("api.token_key must not be empty");
    }
    config.pagination.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.token_key, "agroAdminToken");
        assert_eq!(config.pagination.objects, 10);
        assert_eq!(config.pagination.units, 150);
        assert_eq!(config.pagination.orders, 20);
        assert_eq!(config.pagination.orders_fetch, 1000);
        assert_eq!(config.log.level(), log::Level::Debug);
    }

    #[test]
    fn test_env_override_is_normalized() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://api.example.uz/api/")).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.uz/api");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let source = DEFAULT_CONFIG.replace("objects = 10", "objects = 0");
        let err = parse_config(&source, None).unwrap_err();
        assert!(err.to_string().contains("pagination.objects"));
    }

    #[test]
    fn test_missing_log_section_defaults() {
        let source = r#"
[api]
token_key = "t"

[pagination]
objects = 1
units = 1
categories = 1
products = 1
users = 1
orders = 1
orders_fetch = 1
lookup_fetch = 1
"#;
        let config = parse_config(source, None).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.api.base_url, "");
    }
}
