//! 快照管理 API
//!
//! 提供磁盘快照管理功能，包括：
//! - 按名称查询快照（存在性检查）
//! - 从源磁盘创建快照
//! - 查询资源组内的快照列表

use reqwest::Method;
use tracing::info;

use crate::api::API_VERSION;
use crate::client::CloudClient;
use crate::error::{CloudError, Result};
use crate::models::{CreateSnapshotRequest, Snapshot, SnapshotList};

/// 快照管理 API
pub struct SnapshotApi<'a> {
    client: &'a CloudClient,
}

impl<'a> SnapshotApi<'a> {
    /// 创建新的快照 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 按名称查询快照
    ///
    /// 不存在时返回 `Ok(None)`，其余错误原样上抛。
    pub async fn get(&self, resource_group: &str, name: &str) -> Result<Option<Snapshot>> {
        info!("查询快照: {}/{}", resource_group, name);
        let result: Result<Snapshot> = self
            .client
            .request(
                Method::GET,
                &format!(
                    "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/snapshots/{}?api-version={}",
                    self.client.subscription_id(),
                    resource_group,
                    name,
                    API_VERSION
                ),
                None::<()>,
            )
            .await;

        match result {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(CloudError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// 从源磁盘创建快照
    ///
    /// # Arguments
    /// * `resource_group` - 快照落地的资源组
    /// * `name` - 快照名称
    /// * `req` - 创建请求（区域 + 源磁盘 ID）
    pub async fn create(
        &self,
        resource_group: &str,
        name: &str,
        req: &CreateSnapshotRequest,
    ) -> Result<Snapshot> {
        info!("创建快照: {}/{}", resource_group, name);
        self.client
            .request(
                Method::PUT,
                &format!(
                    "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/snapshots/{}?api-version={}",
                    self.client.subscription_id(),
                    resource_group,
                    name,
                    API_VERSION
                ),
                Some(req),
            )
            .await
    }

    /// 查询资源组内的所有快照
    pub async fn list(&self, resource_group: &str) -> Result<Vec<Snapshot>> {
        info!("查询快照列表: {}", resource_group);
        let list: SnapshotList = self
            .client
            .request(
                Method::GET,
                &format!(
                    "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/snapshots?api-version={}",
                    self.client.subscription_id(),
                    resource_group,
                    API_VERSION
                ),
                None::<()>,
            )
            .await?;
        Ok(list.value)
    }
}
