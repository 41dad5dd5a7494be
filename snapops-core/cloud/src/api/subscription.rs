//! 订阅 API
//!
//! 只暴露订阅详情查询，作为凭证有效性的轻量探活调用。

use reqwest::Method;
use tracing::info;

use crate::api::API_VERSION;
use crate::client::CloudClient;
use crate::error::Result;
use crate::models::Subscription;

/// 订阅 API
pub struct SubscriptionApi<'a> {
    client: &'a CloudClient,
}

impl<'a> SubscriptionApi<'a> {
    /// 创建新的订阅 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 查询当前订阅详情
    pub async fn get(&self) -> Result<Subscription> {
        info!("查询订阅详情: {}", self.client.subscription_id());
        self.client
            .request(
                Method::GET,
                &format!(
                    "/subscriptions/{}?api-version={}",
                    self.client.subscription_id(),
                    API_VERSION
                ),
                None::<()>,
            )
            .await
    }
}
