//! 云磁盘服务接口
//!
//! 编排逻辑只依赖这个能力接口，不直接触碰 HTTP 客户端，
//! 测试用内存实现替换。

use async_trait::async_trait;

use snapops_cloud::{CloudClient, CloudError, CreateSnapshotRequest, Snapshot, VirtualMachine};

use crate::error::EngineError;

/// 云磁盘服务
#[async_trait]
pub trait CloudDiskService: Send + Sync {
    /// 会话检查
    ///
    /// 无活动会话或订阅探活失败都是致命错误，中止整个运行。
    async fn verify_session(&self) -> Result<(), EngineError>;

    /// 按资源组和名称查询虚拟机
    async fn get_vm(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<VirtualMachine, CloudError>;

    /// 按名称查询快照，不存在时返回 `Ok(None)`
    async fn get_snapshot(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<Option<Snapshot>, CloudError>;

    /// 从源磁盘创建快照
    async fn create_snapshot(
        &self,
        resource_group: &str,
        name: &str,
        location: &str,
        source_disk_id: &str,
    ) -> Result<Snapshot, CloudError>;
}

/// 基于管理 API 客户端的云磁盘服务实现
pub struct RemoteDiskService {
    client: CloudClient,
}

impl RemoteDiskService {
    /// 包装已构造的客户端
    pub fn new(client: CloudClient) -> Self {
        Self { client }
    }

    /// 访问底层客户端
    pub fn client(&self) -> &CloudClient {
        &self.client
    }
}

#[async_trait]
impl CloudDiskService for RemoteDiskService {
    async fn verify_session(&self) -> Result<(), EngineError> {
        if self.client.get_token().await.is_err() {
            return Err(EngineError::NoSession);
        }

        // 一次订阅查询确认凭证仍然有效，失败不重试
        self.client
            .subscription()
            .get()
            .await
            .map_err(|e| EngineError::AuthExpired(e.to_string()))?;

        Ok(())
    }

    async fn get_vm(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<VirtualMachine, CloudError> {
        self.client.vm().get(resource_group, name).await
    }

    async fn get_snapshot(
        &self,
        resource_group: &str,
        name: &str,
    ) -> Result<Option<Snapshot>, CloudError> {
        self.client.snapshot().get(resource_group, name).await
    }

    async fn create_snapshot(
        &self,
        resource_group: &str,
        name: &str,
        location: &str,
        source_disk_id: &str,
    ) -> Result<Snapshot, CloudError> {
        let req = CreateSnapshotRequest::from_disk(location, source_disk_id);
        self.client.snapshot().create(resource_group, name, &req).await
    }
}
