//! CLI 配置管理
//!
//! **数据存储方式**: TOML 文件，提供云平台会话上下文
//!
//! 配置查找顺序:
//! 1. `--config` 指定的路径
//! 2. `~/.config/snapops/config.toml` (用户配置目录)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI 配置 (顶层)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// 云平台配置
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudSection>,
}

/// 云平台配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudSection {
    /// 管理 API 基础 URL
    pub base_url: String,

    /// 订阅 ID
    pub subscription_id: String,

    /// 租户 ID
    pub tenant_id: String,

    /// 应用 ID
    pub client_id: String,

    /// 应用密钥
    pub client_secret: String,

    /// 是否验证 SSL 证书
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// 连接超时 (秒)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// 请求超时 (秒)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_verify_ssl() -> bool {
    true
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl CliConfig {
    /// 用户配置目录下的缺省路径
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("无法获取用户主目录")?;
        Ok(home.join(".config").join("snapops").join("config.toml"))
    }

    /// 从指定路径加载配置
    pub fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path))?;

        toml::from_str(&content).with_context(|| format!("解析配置文件失败: {}", path))
    }

    /// 加载配置
    ///
    /// 指定路径不存在时回落到用户配置目录。
    pub fn load(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            return Self::load_from_path(path);
        }

        let fallback = Self::default_path()?;
        if fallback.exists() {
            return Self::load_from_path(&fallback.to_string_lossy());
        }

        anyhow::bail!("未找到配置文件: {} (也不存在 {:?})", path, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [cloud]
            base_url = "https://management.cloud.example"
            subscription_id = "00000000-0000-0000-0000-000000000001"
            tenant_id = "contoso"
            client_id = "app-1"
            client_secret = "secret"
            verify_ssl = false
            connect_timeout = 5
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        let cloud = config.cloud.unwrap();
        assert_eq!(cloud.base_url, "https://management.cloud.example");
        assert!(!cloud.verify_ssl);
        assert_eq!(cloud.connect_timeout, 5);
        // 未写的字段落到默认值
        assert_eq!(cloud.request_timeout, 30);
    }

    #[test]
    fn test_parse_config_without_cloud_section() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert!(config.cloud.is_none());
    }

    #[test]
    fn test_timeout_defaults() {
        let toml_str = r#"
            [cloud]
            base_url = "https://management.cloud.example"
            subscription_id = "sub"
            tenant_id = "tenant"
            client_id = "app"
            client_secret = "secret"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        let cloud = config.cloud.unwrap();
        assert!(cloud.verify_ssl);
        assert_eq!(cloud.connect_timeout, 10);
        assert_eq!(cloud.request_timeout, 30);
    }
}
