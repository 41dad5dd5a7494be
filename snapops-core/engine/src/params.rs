//! 快照任务参数
//!
//! 原始参数整体校验后归一化为执行计划。校验发生在任何远程调用之前，
//! 缺少必填项时整个运行立即中止。

use crate::error::{EngineError, Result};

/// 快照任务原始参数
#[derive(Debug, Clone, Default)]
pub struct SnapshotParams {
    /// 变更单号，嵌入每个快照名称
    pub ticket: String,

    /// 源虚拟机所在资源组
    pub resource_group: String,

    /// 单虚拟机名称
    pub vm_name: Option<String>,

    /// 逗号分隔的多虚拟机列表
    pub vm_list: Option<String>,

    /// 快照落地资源组，缺省为源资源组
    pub snapshot_resource_group: Option<String>,
}

/// 校验归一化后的执行计划
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// 变更单号
    pub ticket: String,

    /// 源虚拟机所在资源组
    pub resource_group: String,

    /// 快照落地资源组
    pub snapshot_resource_group: String,

    /// 待处理的虚拟机名称，保持输入顺序
    pub vm_names: Vec<String>,

    /// 是否多虚拟机模式，决定是否输出汇总块
    pub multi: bool,
}

impl SnapshotParams {
    /// 校验并归一化参数
    pub fn validate(&self) -> Result<RunPlan> {
        if self.ticket.trim().is_empty() {
            return Err(EngineError::InvalidParams(
                "变更单号不能为空".to_string(),
            ));
        }

        if self.resource_group.trim().is_empty() {
            return Err(EngineError::InvalidParams("资源组不能为空".to_string()));
        }

        let (vm_names, multi) = match (&self.vm_name, &self.vm_list) {
            (Some(_), Some(_)) => {
                return Err(EngineError::InvalidParams(
                    "单虚拟机名称与多虚拟机列表不能同时指定".to_string(),
                ));
            }
            (Some(name), None) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(EngineError::InvalidParams(
                        "虚拟机名称不能为空".to_string(),
                    ));
                }
                (vec![name.to_string()], false)
            }
            (None, Some(list)) => {
                let names: Vec<String> = list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if names.is_empty() {
                    return Err(EngineError::InvalidParams(
                        "多虚拟机列表不能为空".to_string(),
                    ));
                }
                (names, true)
            }
            (None, None) => {
                return Err(EngineError::InvalidParams(
                    "必须指定虚拟机名称或多虚拟机列表".to_string(),
                ));
            }
        };

        let snapshot_resource_group = self
            .snapshot_resource_group
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.resource_group.trim())
            .to_string();

        Ok(RunPlan {
            ticket: self.ticket.trim().to_string(),
            resource_group: self.resource_group.trim().to_string(),
            snapshot_resource_group,
            vm_names,
            multi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> SnapshotParams {
        SnapshotParams {
            ticket: "TIX123".to_string(),
            resource_group: "prod-rg".to_string(),
            vm_name: Some("web-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_ticket_rejected() {
        let params = SnapshotParams {
            ticket: "   ".to_string(),
            ..base_params()
        };
        assert!(matches!(
            params.validate(),
            Err(EngineError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_missing_vm_selection_rejected() {
        let params = SnapshotParams {
            vm_name: None,
            ..base_params()
        };
        assert!(matches!(
            params.validate(),
            Err(EngineError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_conflicting_vm_selection_rejected() {
        let params = SnapshotParams {
            vm_list: Some("a,b".to_string()),
            ..base_params()
        };
        assert!(matches!(
            params.validate(),
            Err(EngineError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_empty_vm_list_rejected() {
        let params = SnapshotParams {
            vm_name: None,
            vm_list: Some(" , ,".to_string()),
            ..base_params()
        };
        assert!(matches!(
            params.validate(),
            Err(EngineError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_single_vm_plan() {
        let plan = base_params().validate().unwrap();
        assert_eq!(plan.vm_names, vec!["web-01".to_string()]);
        assert!(!plan.multi);
        assert_eq!(plan.snapshot_resource_group, "prod-rg");
    }

    #[test]
    fn test_vm_list_normalization() {
        let params = SnapshotParams {
            vm_name: None,
            vm_list: Some(" web-01 , web-02 ,db-01 ".to_string()),
            ..base_params()
        };
        let plan = params.validate().unwrap();
        assert_eq!(plan.vm_names, vec!["web-01", "web-02", "db-01"]);
        assert!(plan.multi);
    }

    #[test]
    fn test_snapshot_resource_group_override() {
        let params = SnapshotParams {
            snapshot_resource_group: Some("backup-rg".to_string()),
            ..base_params()
        };
        let plan = params.validate().unwrap();
        assert_eq!(plan.snapshot_resource_group, "backup-rg");
    }
}
