//! # Configuration DTO / 配置数据对象
//!
//! Data only. Mapping from TOML performs no validation and computes no
//! defaults: a missing key is an empty fact, resolved later by the adapter
//! that consumes it.
//! 仅数据。缺失的键是"空"的事实，由使用它的适配器再做解析。

use std::path::PathBuf;

/// Portal configuration DTO (pure data, no logic)
/// 门户配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Backend API root, e.g. `http://localhost:8000/api` (may be empty)
    pub api_base_url: String,

    /// Request timeout in milliseconds, 0 when unset
    pub api_timeout_ms: u64,

    /// Token sent as `Authorization: Token <t>` (may be empty)
    pub api_token: String,

    /// Directory for the rolling log file; empty disables file logging
    /// 日志文件目录；为空时不写文件日志
    pub log_directory: PathBuf,
}

impl PortalConfig {
    /// Create PortalConfig from TOML value
    /// 从 TOML 值创建 PortalConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let api = toml_value.get("api");
        Ok(Self {
            api_base_url: api
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            api_timeout_ms: api
                .and_then(|a| a.get("timeout_ms"))
                .and_then(|v| v.as_integer())
                .map(|ms| ms.max(0) as u64)
                .unwrap_or(0),
            api_token: api
                .and_then(|a| a.get("token"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            log_directory: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("directory"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty PortalConfig (all empty/default values)
    /// 创建空的 PortalConfig
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_timeout_ms: 0,
            api_token: String::new(),
            log_directory: PathBuf::new(),
        }
    }
}
