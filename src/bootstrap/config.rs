//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file into the [`PortalConfig`] DTO. Pure data loading: no
//! validation and no defaults beyond "absent file means empty config".
//! 仅纯数据加载，不做验证。

use std::path::Path;

use anyhow::Context;
use portal_core::config::PortalConfig;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "portal.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// A missing file yields [`PortalConfig::empty`]; adapters then fall back to
/// their built-in defaults.
///
/// # Errors / 错误
///
/// Returns error if the file exists but cannot be read, or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<PortalConfig> {
    if !config_path.exists() {
        return Ok(PortalConfig::empty());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    PortalConfig::from_toml(&toml_value)
}
