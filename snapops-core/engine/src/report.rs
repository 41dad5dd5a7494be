//! 运行结果模型
//!
//! 所有结果在一次运行内产生并随运行结束丢弃，不做持久化。计数器
//! 收在 [`RunSummary`] 里由执行器显式传递和返回，没有全局可变状态。

use serde::{Deserialize, Serialize};

/// 单块磁盘的快照结局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskOutcome {
    /// 快照已创建
    Created,
    /// 同名快照已存在，跳过创建
    SkippedExists,
    /// 创建调用失败
    Failed,
}

impl DiskOutcome {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            DiskOutcome::Created => "已创建",
            DiskOutcome::SkippedExists => "已跳过",
            DiskOutcome::Failed => "失败",
        }
    }
}

/// 虚拟机级结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VmStatus {
    /// 全部磁盘处理完成（数据盘允许个别失败）
    Success,
    /// OS 盘快照创建失败
    Failed,
    /// 虚拟机查询失败
    NotFound,
}

impl VmStatus {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            VmStatus::Success => "成功",
            VmStatus::Failed => "失败",
            VmStatus::NotFound => "未找到",
        }
    }
}

/// 单块磁盘的处理结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskResult {
    /// 磁盘名称
    pub disk_name: String,

    /// 推导出的快照名称
    pub snapshot_name: String,

    /// 数据盘的挂载槽位号，OS 盘为 None
    pub lun: Option<i32>,

    /// 结局
    pub outcome: DiskOutcome,

    /// 远程调用的错误信息，原样保留
    pub error: Option<String>,
}

/// 单个虚拟机的处理结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VmResult {
    /// 虚拟机名称
    pub vm_name: String,

    /// 虚拟机级状态
    pub status: VmStatus,

    /// OS 盘结果，虚拟机未找到时为 None
    pub os_disk: Option<DiskResult>,

    /// 数据盘结果，保持磁盘挂载顺序
    pub data_disks: Vec<DiskResult>,

    /// 虚拟机级错误信息（OS 盘创建失败或查询失败）
    pub error: Option<String>,
}

impl VmResult {
    /// 创建初始结果，状态在处理结束时敲定
    pub fn new(vm_name: &str) -> Self {
        Self {
            vm_name: vm_name.to_string(),
            status: VmStatus::Success,
            os_disk: None,
            data_disks: Vec::new(),
            error: None,
        }
    }

    /// 虚拟机查询失败的结果
    pub fn not_found(vm_name: &str, error: String) -> Self {
        Self {
            vm_name: vm_name.to_string(),
            status: VmStatus::NotFound,
            os_disk: None,
            data_disks: Vec::new(),
            error: Some(error),
        }
    }

    /// 遍历该虚拟机的所有磁盘结果（OS 盘在前）
    pub fn disk_results(&self) -> impl Iterator<Item = &DiskResult> {
        self.os_disk.iter().chain(self.data_disks.iter())
    }
}

/// 运行汇总
///
/// 五个计数器加按序的虚拟机结果，仅用于最终报告输出。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// 变更单号
    pub ticket: String,

    /// 是否多虚拟机模式
    pub multi: bool,

    /// 虚拟机总数
    pub total_vms: u32,

    /// 处理成功的虚拟机数
    pub succeeded_vms: u32,

    /// 失败的虚拟机数（含未找到）
    pub failed_vms: u32,

    /// 创建的快照数
    pub snapshots_created: u32,

    /// 跳过的快照数
    pub snapshots_skipped: u32,

    /// 按处理顺序的虚拟机结果
    pub vms: Vec<VmResult>,
}

impl RunSummary {
    /// 创建空汇总
    pub fn new(ticket: &str, multi: bool) -> Self {
        Self {
            ticket: ticket.to_string(),
            multi,
            total_vms: 0,
            succeeded_vms: 0,
            failed_vms: 0,
            snapshots_created: 0,
            snapshots_skipped: 0,
            vms: Vec::new(),
        }
    }

    /// 记录一个虚拟机结果并更新计数器
    pub fn record_vm(&mut self, result: VmResult) {
        self.total_vms += 1;
        match result.status {
            VmStatus::Success => self.succeeded_vms += 1,
            VmStatus::Failed | VmStatus::NotFound => self.failed_vms += 1,
        }

        for disk in result.disk_results() {
            match disk.outcome {
                DiskOutcome::Created => self.snapshots_created += 1,
                DiskOutcome::SkippedExists => self.snapshots_skipped += 1,
                DiskOutcome::Failed => {}
            }
        }

        self.vms.push(result);
    }

    /// 本次运行是否创建或跳过过任何快照
    pub fn has_snapshot_activity(&self) -> bool {
        self.snapshots_created > 0 || self.snapshots_skipped > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(name: &str, outcome: DiskOutcome) -> DiskResult {
        DiskResult {
            disk_name: name.to_string(),
            snapshot_name: format!("{}-snapshot-TIX123-20260804093000", name),
            lun: None,
            outcome,
            error: None,
        }
    }

    #[test]
    fn test_counters_follow_disk_outcomes() {
        let mut summary = RunSummary::new("TIX123", true);

        let mut vm1 = VmResult::new("web-01");
        vm1.os_disk = Some(disk("web-01-os", DiskOutcome::Created));
        vm1.data_disks.push(disk("data1", DiskOutcome::SkippedExists));
        summary.record_vm(vm1);

        let mut vm2 = VmResult::new("web-02");
        vm2.status = VmStatus::Failed;
        vm2.os_disk = Some(disk("web-02-os", DiskOutcome::Failed));
        vm2.error = Some("boom".to_string());
        summary.record_vm(vm2);

        summary.record_vm(VmResult::not_found("ghost", "404".to_string()));

        assert_eq!(summary.total_vms, 3);
        assert_eq!(summary.succeeded_vms, 1);
        assert_eq!(summary.failed_vms, 2);
        assert_eq!(summary.snapshots_created, 1);
        assert_eq!(summary.snapshots_skipped, 1);
        assert!(summary.has_snapshot_activity());
    }

    #[test]
    fn test_no_activity_when_nothing_created_or_skipped() {
        let mut summary = RunSummary::new("TIX123", false);
        summary.record_vm(VmResult::not_found("ghost", "404".to_string()));

        assert!(!summary.has_snapshot_activity());
        assert_eq!(summary.failed_vms, 1);
    }

    #[test]
    fn test_disk_results_order_os_first() {
        let mut vm = VmResult::new("web-01");
        vm.os_disk = Some(disk("os", DiskOutcome::Created));
        vm.data_disks.push(disk("d0", DiskOutcome::Created));
        vm.data_disks.push(disk("d1", DiskOutcome::Created));

        let names: Vec<&str> = vm.disk_results().map(|d| d.disk_name.as_str()).collect();
        assert_eq!(names, vec!["os", "d0", "d1"]);
    }
}
