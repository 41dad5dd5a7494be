//! 虚拟机 API
//!
//! 按资源组和名称查询虚拟机元数据，返回区域和磁盘引用
//! （OS 盘 + 数据盘，数据盘带 LUN）。

use reqwest::Method;
use tracing::info;

use crate::api::API_VERSION;
use crate::client::CloudClient;
use crate::error::Result;
use crate::models::VirtualMachine;

/// 虚拟机 API
pub struct VmApi<'a> {
    client: &'a CloudClient,
}

impl<'a> VmApi<'a> {
    /// 创建新的虚拟机 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 查询虚拟机详情
    ///
    /// # Arguments
    /// * `resource_group` - 资源组名称
    /// * `name` - 虚拟机名称
    pub async fn get(&self, resource_group: &str, name: &str) -> Result<VirtualMachine> {
        info!("查询虚拟机详情: {}/{}", resource_group, name);
        self.client
            .request(
                Method::GET,
                &format!(
                    "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/virtualMachines/{}?api-version={}",
                    self.client.subscription_id(),
                    resource_group,
                    name,
                    API_VERSION
                ),
                None::<()>,
            )
            .await
    }
}
