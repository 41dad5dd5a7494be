//! 快照任务执行器
//!
//! 严格串行：一次一个虚拟机，一个虚拟机内一次一块磁盘。
//! 没有重试，远程调用失败要么中止整个运行（会话检查），
//! 要么记录到结果后继续（虚拟机查询、磁盘快照）。

use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::naming;
use crate::params::{RunPlan, SnapshotParams};
use crate::report::{DiskOutcome, DiskResult, RunSummary, VmResult, VmStatus};
use crate::service::CloudDiskService;

/// 快照任务执行器
pub struct SnapshotRunner<S: CloudDiskService> {
    service: S,
}

impl<S: CloudDiskService> SnapshotRunner<S> {
    /// 创建执行器
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// 访问底层服务
    pub fn service(&self) -> &S {
        &self.service
    }

    /// 执行快照任务
    ///
    /// 先校验参数再做会话检查，两者任一失败都在处理任何虚拟机之前
    /// 返回错误。之后按输入顺序逐个处理虚拟机并累积运行汇总。
    pub async fn run(&self, params: &SnapshotParams) -> Result<RunSummary> {
        let plan = params.validate()?;
        self.service.verify_session().await?;

        info!(
            "开始快照任务: 工单 {}, {} 个虚拟机",
            plan.ticket,
            plan.vm_names.len()
        );

        let mut summary = RunSummary::new(&plan.ticket, plan.multi);
        for vm_name in &plan.vm_names {
            let result = self.snapshot_vm(vm_name, &plan).await;
            summary.record_vm(result);
        }

        info!(
            "快照任务完成: 创建 {} 个, 跳过 {} 个, 失败虚拟机 {} 个",
            summary.snapshots_created, summary.snapshots_skipped, summary.failed_vms
        );

        Ok(summary)
    }

    /// 处理单个虚拟机
    ///
    /// 查询失败按「未找到」记录，不影响批次里的其他虚拟机。
    async fn snapshot_vm(&self, vm_name: &str, plan: &RunPlan) -> VmResult {
        info!("处理虚拟机: {}/{}", plan.resource_group, vm_name);

        let vm = match self.service.get_vm(&plan.resource_group, vm_name).await {
            Ok(vm) => vm,
            Err(e) => {
                warn!("虚拟机查询失败: {} - {}", vm_name, e);
                return VmResult::not_found(vm_name, e.to_string());
            }
        };

        // 时间戳每个虚拟机取一次，OS 盘和数据盘共用
        let timestamp = naming::vm_timestamp();
        let profile = &vm.properties.storage_profile;

        let mut result = VmResult::new(vm_name);

        let os_result = self
            .snapshot_disk(
                &profile.os_disk.name,
                None,
                &profile.os_disk.managed_disk.id,
                &vm.location,
                &timestamp,
                plan,
            )
            .await;
        let os_error = os_result.error.clone();
        result.os_disk = Some(os_result);

        // OS 盘创建失败中止该虚拟机，数据盘不再尝试
        if let Some(e) = os_error {
            result.error = Some(e);
            result.status = VmStatus::Failed;
            return result;
        }

        for disk in &profile.data_disks {
            let disk_result = self
                .snapshot_disk(
                    &disk.name,
                    Some(disk.lun),
                    &disk.managed_disk.id,
                    &vm.location,
                    &timestamp,
                    plan,
                )
                .await;
            result.data_disks.push(disk_result);
        }

        // 数据盘失败只记录在磁盘结果上，虚拟机状态由 OS 盘错误决定
        result.status = if result.error.is_some() {
            VmStatus::Failed
        } else {
            VmStatus::Success
        };
        result
    }

    /// 处理单块磁盘
    async fn snapshot_disk(
        &self,
        disk_name: &str,
        lun: Option<i32>,
        source_disk_id: &str,
        location: &str,
        timestamp: &str,
        plan: &RunPlan,
    ) -> DiskResult {
        let snapshot_name = naming::snapshot_name(disk_name, &plan.ticket, timestamp);

        // 存在性检查失败按不存在处理，最终由创建调用裁决
        let existing = match self
            .service
            .get_snapshot(&plan.snapshot_resource_group, &snapshot_name)
            .await
        {
            Ok(found) => found,
            Err(e) => {
                debug!("快照查询失败，按不存在处理: {} - {}", snapshot_name, e);
                None
            }
        };

        if existing.is_some() {
            info!("快照已存在，跳过创建: {}", snapshot_name);
            return DiskResult {
                disk_name: disk_name.to_string(),
                snapshot_name,
                lun,
                outcome: DiskOutcome::SkippedExists,
                error: None,
            };
        }

        match self
            .service
            .create_snapshot(
                &plan.snapshot_resource_group,
                &snapshot_name,
                location,
                source_disk_id,
            )
            .await
        {
            Ok(_) => {
                info!("快照创建成功: {}", snapshot_name);
                DiskResult {
                    disk_name: disk_name.to_string(),
                    snapshot_name,
                    lun,
                    outcome: DiskOutcome::Created,
                    error: None,
                }
            }
            Err(e) => {
                error!("快照创建失败: {} - {}", snapshot_name, e);
                DiskResult {
                    disk_name: disk_name.to_string(),
                    snapshot_name,
                    lun,
                    outcome: DiskOutcome::Failed,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
