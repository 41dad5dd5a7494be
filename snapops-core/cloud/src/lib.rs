//! 云平台管理 API 客户端
//!
//! 提供与云管理平台 REST API 交互的客户端实现，覆盖磁盘快照
//! 编排所需的三类资源。
//!
//! # 功能
//!
//! - **订阅查询** (`SubscriptionApi`): 凭证有效性探活
//! - **虚拟机查询** (`VmApi`): 按资源组和名称获取虚拟机元数据
//! - **快照管理** (`SnapshotApi`): 快照存在性检查、创建、列表
//!
//! # 示例
//!
//! ```ignore
//! use snapops_cloud::{CloudClient, CloudConfig, CreateSnapshotRequest};
//!
//! // 创建客户端并登录
//! let client = CloudClient::new("https://management.cloud.example", "sub-id", CloudConfig::default())?;
//! client.login("tenant-id", "client-id", "client-secret").await?;
//!
//! // 查询虚拟机
//! let vm = client.vm().get("prod-rg", "web-01").await?;
//!
//! // 创建 OS 盘快照
//! let req = CreateSnapshotRequest::from_disk(
//!     &vm.location,
//!     &vm.properties.storage_profile.os_disk.managed_disk.id,
//! );
//! client.snapshot().create("prod-rg", "web-01-os-snapshot-TIX123-20260804093000", &req).await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use client::{CloudClient, CloudConfig};
pub use error::{CloudError, Result};

// 导出 API 模块
pub use api::{SnapshotApi, SubscriptionApi, VmApi};

// 导出数据模型
pub use models::{
    CreateSnapshotRequest, DataDisk, ManagedDiskRef, OsDisk, Snapshot, SnapshotList,
    StorageProfile, Subscription, VirtualMachine, VmProperties,
};
