//! Effective backend API settings.
//!
//! Resolution order per field: environment override, then the configuration
//! file, then the built-in default. Empty values count as unset.
//! 解析顺序：环境变量 > 配置文件 > 内置默认值

use std::time::Duration;

use portal_core::config::PortalConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

pub const BASE_URL_ENV: &str = "PORTAL_API_BASE_URL";
pub const TOKEN_ENV: &str = "PORTAL_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// API root without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            token: None,
        }
    }
}

impl ApiSettings {
    /// Resolve against the process environment.
    pub fn resolve(config: &PortalConfig) -> Self {
        Self::resolve_with(config, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve_with(config: &PortalConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = env(BASE_URL_ENV)
            .filter(|value| !value.is_empty())
            .or_else(|| non_empty(&config.api_base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_ms = match config.api_timeout_ms {
            0 => DEFAULT_TIMEOUT_MS,
            ms => ms,
        };

        let token = env(TOKEN_ENV)
            .filter(|value| !value.is_empty())
            .or_else(|| non_empty(&config.api_token));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(timeout_ms),
            token,
        }
    }

    /// Absolute URL of `path` below the API root.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
