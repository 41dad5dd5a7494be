//! 云平台客户端核心实现

use std::sync::Arc;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::{SnapshotApi, SubscriptionApi, VmApi};
use crate::error::{CloudError, Result};

/// 云平台客户端配置
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// 连接超时（秒）
    pub connect_timeout: u64,

    /// 请求超时（秒）
    pub request_timeout: u64,

    /// 是否验证 SSL 证书
    pub verify_ssl: bool,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            connect_timeout: 10,
            request_timeout: 30,
            verify_ssl: true,
        }
    }
}

/// 云平台客户端
///
/// 持有认证令牌和订阅上下文。令牌由 [`login`](CloudClient::login) 获取，
/// 之后所有资源请求都带 Bearer 头发出。
pub struct CloudClient {
    /// 管理 API 基础 URL
    base_url: String,

    /// 订阅 ID，所有资源路径都挂在该订阅下
    subscription_id: String,

    /// HTTP 客户端
    http_client: Client,

    /// 认证令牌
    access_token: Arc<RwLock<Option<String>>>,
}

impl CloudClient {
    /// 创建新的云平台客户端
    pub fn new(base_url: &str, subscription_id: &str, config: CloudConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| CloudError::HttpError(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            subscription_id: subscription_id.to_string(),
            http_client,
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    /// 客户端凭据登录
    ///
    /// # Arguments
    /// * `tenant_id` - 租户 ID
    /// * `client_id` - 应用 ID
    /// * `client_secret` - 应用密钥
    pub async fn login(
        &self,
        tenant_id: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<()> {
        info!("云平台登录: 租户 {}", tenant_id);

        let token_url = format!("{}/{}/oauth2/token", self.base_url, tenant_id);
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("resource", self.base_url.as_str()),
        ];

        let response = self
            .http_client
            .post(&token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| CloudError::HttpError(e.to_string()))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CloudError::ParseError(e.to_string()))?;

        if !status.is_success() {
            let msg = body["error_description"]
                .as_str()
                .or_else(|| body["error"].as_str())
                .unwrap_or("未知错误");
            return Err(CloudError::AuthError(format!("登录失败: {}", msg)));
        }

        let token = body["access_token"]
            .as_str()
            .ok_or_else(|| CloudError::AuthError("未获取到访问令牌".to_string()))?
            .to_string();

        *self.access_token.write().await = Some(token);

        info!("云平台登录成功");
        Ok(())
    }

    /// 注销登出
    pub async fn logout(&self) {
        info!("云平台登出");
        *self.access_token.write().await = None;
    }

    /// 获取订阅 API
    pub fn subscription(&self) -> SubscriptionApi<'_> {
        SubscriptionApi::new(self)
    }

    /// 获取虚拟机 API
    pub fn vm(&self) -> VmApi<'_> {
        VmApi::new(self)
    }

    /// 获取快照 API
    pub fn snapshot(&self) -> SnapshotApi<'_> {
        SnapshotApi::new(self)
    }

    /// 发送 HTTP 请求
    pub(crate) async fn request<T: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<T>,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);
        debug!("管理 API 请求: {} {}", method, url);

        let token = self.get_token().await?;

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CloudError::HttpError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(CloudError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "无法读取错误响应".to_string());
            warn!("API 请求失败: {} - {}", status, error_text);
            return Err(CloudError::ApiError(status.as_u16(), error_text));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| CloudError::ParseError(e.to_string()))
    }

    /// 获取订阅 ID
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// 获取当前访问令牌
    ///
    /// 未登录时返回认证错误，调用方以此判断会话是否存在。
    pub async fn get_token(&self) -> Result<String> {
        let token = self.access_token.read().await;
        token
            .clone()
            .ok_or_else(|| CloudError::AuthError("未找到活动会话，请先登录".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_client_creation() {
        let client = CloudClient::new(
            "https://management.cloud.example/",
            "00000000-0000-0000-0000-000000000001",
            CloudConfig::default(),
        );
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_token_absent_before_login() {
        let client = CloudClient::new(
            "https://management.cloud.example",
            "sub-1",
            CloudConfig::default(),
        )
        .unwrap();

        let result = client.get_token().await;
        assert!(matches!(result, Err(CloudError::AuthError(_))));
    }
}
