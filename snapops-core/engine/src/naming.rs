//! 快照命名
//!
//! 快照名称是 (磁盘名, 工单号, 时间戳) 的纯函数。时间戳精确到秒，
//! 每个虚拟机取一次，该虚拟机的 OS 盘和数据盘共用。同一秒内对同一
//! 磁盘和工单重复运行会推导出同名快照，由存在性检查拦截。

use chrono::Local;

/// 时间戳格式，秒级精度
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// 取当前时间戳
pub fn vm_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// 推导快照名称
pub fn snapshot_name(disk_name: &str, ticket: &str, timestamp: &str) -> String {
    format!("{}-snapshot-{}-{}", disk_name, ticket, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_name_format() {
        assert_eq!(
            snapshot_name("osdisk1", "TIX123", "20260804093000"),
            "osdisk1-snapshot-TIX123-20260804093000"
        );
    }

    #[test]
    fn test_snapshot_name_deterministic() {
        let a = snapshot_name("data1", "CHG-42", "20260804093000");
        let b = snapshot_name("data1", "CHG-42", "20260804093000");
        assert_eq!(a, b);
    }

    #[test]
    fn test_vm_timestamp_second_granularity() {
        let ts = vm_timestamp();
        assert_eq!(ts.len(), 14);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
    }
}
