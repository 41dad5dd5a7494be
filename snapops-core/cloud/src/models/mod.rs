//! 云平台数据模型
//!
//! 管理 API 返回的资源 JSON 的精简映射。只保留磁盘快照编排需要的字段，
//! 其余字段在反序列化时丢弃。

use serde::{Deserialize, Serialize};

/// 订阅信息
///
/// 仅用于会话探活，字段保持最小化。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// 订阅 ID
    #[serde(rename = "subscriptionId")]
    pub id: String,

    /// 显示名称
    #[serde(default)]
    pub display_name: Option<String>,

    /// 订阅状态 (Enabled/Disabled/...)
    #[serde(default)]
    pub state: Option<String>,
}

/// 虚拟机信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    /// 虚拟机名称
    pub name: String,

    /// 所在区域
    pub location: String,

    /// 虚拟机属性
    pub properties: VmProperties,
}

/// 虚拟机属性
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmProperties {
    /// 存储配置
    pub storage_profile: StorageProfile,
}

/// 存储配置
///
/// OS 盘必定存在；数据盘列表保持平台返回的顺序（按 LUN 排列）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
    /// OS 盘
    pub os_disk: OsDisk,

    /// 数据盘列表
    #[serde(default)]
    pub data_disks: Vec<DataDisk>,
}

/// OS 盘引用
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsDisk {
    /// 磁盘名称
    pub name: String,

    /// 托管磁盘引用
    pub managed_disk: ManagedDiskRef,
}

/// 数据盘引用
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDisk {
    /// 磁盘名称
    pub name: String,

    /// 挂载槽位号
    pub lun: i32,

    /// 托管磁盘引用
    pub managed_disk: ManagedDiskRef,
}

/// 托管磁盘引用
///
/// `id` 是平台侧的不透明句柄，创建快照时作为源磁盘标识原样传回。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDiskRef {
    /// 磁盘资源 ID
    pub id: String,
}

/// 快照信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// 快照名称
    pub name: String,

    /// 所在区域
    pub location: String,

    /// 快照资源 ID
    #[serde(default)]
    pub id: Option<String>,

    /// 快照属性
    #[serde(default)]
    pub properties: Option<SnapshotProperties>,
}

/// 快照属性
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotProperties {
    /// 置备状态 (Succeeded/Creating/Failed)
    #[serde(default)]
    pub provisioning_state: Option<String>,

    /// 创建时间
    #[serde(default)]
    pub time_created: Option<String>,

    /// 磁盘大小 (GB)
    #[serde(default)]
    pub disk_size_gb: Option<u64>,
}

/// 快照列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotList {
    /// 快照列表
    #[serde(default)]
    pub value: Vec<Snapshot>,
}

/// 创建快照请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnapshotRequest {
    /// 目标区域，与源虚拟机一致
    pub location: String,

    /// 快照属性
    pub properties: CreateSnapshotProperties,
}

/// 创建快照请求属性
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnapshotProperties {
    /// 创建数据
    pub creation_data: CreationData,
}

/// 快照创建数据
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationData {
    /// 创建方式，磁盘快照固定为 Copy
    pub create_option: String,

    /// 源磁盘资源 ID
    pub source_resource_id: String,
}

impl CreateSnapshotRequest {
    /// 从源磁盘构造快照创建请求
    pub fn from_disk(location: &str, source_disk_id: &str) -> Self {
        Self {
            location: location.to_string(),
            properties: CreateSnapshotProperties {
                creation_data: CreationData {
                    create_option: "Copy".to_string(),
                    source_resource_id: source_disk_id.to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_machine_deserialize() {
        let json = serde_json::json!({
            "name": "web-01",
            "location": "eastus",
            "properties": {
                "storageProfile": {
                    "osDisk": {
                        "name": "web-01-os",
                        "managedDisk": { "id": "/subscriptions/s/disks/web-01-os" }
                    },
                    "dataDisks": [
                        {
                            "name": "web-01-data0",
                            "lun": 0,
                            "managedDisk": { "id": "/subscriptions/s/disks/web-01-data0" }
                        }
                    ]
                }
            }
        });

        let vm: VirtualMachine = serde_json::from_value(json).unwrap();
        assert_eq!(vm.name, "web-01");
        assert_eq!(vm.properties.storage_profile.os_disk.name, "web-01-os");
        assert_eq!(vm.properties.storage_profile.data_disks.len(), 1);
        assert_eq!(vm.properties.storage_profile.data_disks[0].lun, 0);
    }

    #[test]
    fn test_virtual_machine_without_data_disks() {
        let json = serde_json::json!({
            "name": "db-01",
            "location": "eastus",
            "properties": {
                "storageProfile": {
                    "osDisk": {
                        "name": "db-01-os",
                        "managedDisk": { "id": "/subscriptions/s/disks/db-01-os" }
                    }
                }
            }
        });

        let vm: VirtualMachine = serde_json::from_value(json).unwrap();
        assert!(vm.properties.storage_profile.data_disks.is_empty());
    }

    #[test]
    fn test_create_snapshot_request_wire_format() {
        let req = CreateSnapshotRequest::from_disk("eastus", "/subscriptions/s/disks/d1");
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["location"], "eastus");
        assert_eq!(json["properties"]["creationData"]["createOption"], "Copy");
        assert_eq!(
            json["properties"]["creationData"]["sourceResourceId"],
            "/subscriptions/s/disks/d1"
        );
    }

    #[test]
    fn test_snapshot_deserialize_minimal() {
        let json = serde_json::json!({
            "name": "d1-snapshot-TIX123-20260804093000",
            "location": "eastus"
        });

        let snapshot: Snapshot = serde_json::from_value(json).unwrap();
        assert!(snapshot.id.is_none());
        assert!(snapshot.properties.is_none());
    }
}
