//! SnapOps 编排引擎
//!
//! 对一批虚拟机执行磁盘快照任务：解析虚拟机 → 枚举 OS 盘和数据盘 →
//! 按确定性名称逐盘创建快照（已存在则跳过）→ 累积运行汇总。
//!
//! 失败策略:
//! - 参数校验失败、会话失效: 致命，整个运行中止
//! - 虚拟机查询失败: 该虚拟机记为「未找到」，批次继续
//! - OS 盘创建失败: 该虚拟机记为「失败」，其数据盘不再尝试
//! - 数据盘创建失败: 只记录在磁盘结果上，后续数据盘继续
//!
//! # 示例
//!
//! ```ignore
//! use snapops_engine::{RemoteDiskService, SnapshotParams, SnapshotRunner};
//!
//! let runner = SnapshotRunner::new(RemoteDiskService::new(client));
//! let params = SnapshotParams {
//!     ticket: "TIX123".to_string(),
//!     resource_group: "prod-rg".to_string(),
//!     vm_name: Some("web-01".to_string()),
//!     ..Default::default()
//! };
//! let summary = runner.run(&params).await?;
//! println!("创建 {} 个快照", summary.snapshots_created);
//! ```

pub mod error;
pub mod naming;
pub mod params;
pub mod report;
pub mod runner;
pub mod service;

pub use error::{EngineError, Result};
pub use params::{RunPlan, SnapshotParams};
pub use report::{DiskOutcome, DiskResult, RunSummary, VmResult, VmStatus};
pub use runner::SnapshotRunner;
pub use service::{CloudDiskService, RemoteDiskService};
