//! CLI 命令处理模块

pub mod common; // 公共工具函数
pub mod snapshot;
pub mod vm; // 虚拟机查询
