//! 公共工具函数模块
//!
//! 提供各命令模块共享的功能：配置加载后的云平台客户端创建和登录。

use anyhow::{Context, Result};

use snapops_cloud::{CloudClient, CloudConfig};

use crate::config::CloudSection;

/// 创建并登录云平台客户端
pub async fn create_cloud_client(cloud: &CloudSection) -> Result<CloudClient> {
    let client_config = CloudConfig {
        connect_timeout: cloud.connect_timeout,
        request_timeout: cloud.request_timeout,
        verify_ssl: cloud.verify_ssl,
    };

    let client = CloudClient::new(&cloud.base_url, &cloud.subscription_id, client_config)
        .context("创建云平台客户端失败")?;

    client
        .login(&cloud.tenant_id, &cloud.client_id, &cloud.client_secret)
        .await
        .context("云平台登录失败")?;

    Ok(client)
}
