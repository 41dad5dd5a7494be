//! 快照管理命令

use anyhow::{Context, Result};
use colored::Colorize;

use snapops_engine::{
    DiskOutcome, DiskResult, RemoteDiskService, RunSummary, SnapshotParams, SnapshotRunner,
    VmStatus,
};

use crate::commands::common::create_cloud_client;
use crate::config::CliConfig;
use crate::SnapshotAction;

pub async fn handle(action: SnapshotAction) -> Result<()> {
    match action {
        SnapshotAction::Create {
            config,
            ticket,
            resource_group,
            vm,
            vms,
            snapshot_resource_group,
        } => {
            create(
                &config,
                ticket,
                resource_group,
                vm,
                vms,
                snapshot_resource_group,
            )
            .await
        }
        SnapshotAction::List {
            config,
            resource_group,
        } => list(&config, &resource_group).await,
    }
}

/// 执行快照任务
async fn create(
    config_path: &str,
    ticket: String,
    resource_group: String,
    vm: Option<String>,
    vms: Option<String>,
    snapshot_resource_group: Option<String>,
) -> Result<()> {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║                    虚拟机磁盘快照任务                          ║");
    println!("╚════════════════════════════════════════════════════════════════╝\n");

    // 1. 加载配置
    println!("📋 步骤 1/3: 加载配置...");
    let config = CliConfig::load(config_path)
        .context(format!("无法加载配置文件: {}", config_path))?;
    let cloud = config
        .cloud
        .as_ref()
        .context("配置文件中未找到云平台配置")?;
    println!("   ✅ 配置加载成功\n");

    // 2. 登录云平台
    println!("📋 步骤 2/3: 登录云平台...");
    let client = create_cloud_client(cloud).await?;
    println!("   ✅ 登录成功\n");

    // 3. 执行快照任务（会话检查由引擎完成）
    println!("📋 步骤 3/3: 执行快照任务...\n");
    let runner = SnapshotRunner::new(RemoteDiskService::new(client));
    let params = SnapshotParams {
        ticket,
        resource_group,
        vm_name: vm,
        vm_list: vms,
        snapshot_resource_group,
    };

    let summary = runner.run(&params).await?;

    print_report(&summary);

    Ok(())
}

/// 输出运行报告
fn print_report(summary: &RunSummary) {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║                      快照任务结果汇总                          ║");
    println!("╚════════════════════════════════════════════════════════════════╝\n");

    if !summary.has_snapshot_activity() {
        println!("{} 本次运行没有创建或跳过任何快照\n", "ℹ".yellow());
    } else {
        for vm in &summary.vms {
            match vm.status {
                VmStatus::NotFound => {
                    println!("{} 虚拟机 {}: {}", "✗".red(), vm.vm_name, vm.status.display_name());
                    if let Some(error) = &vm.error {
                        println!("   {}", error.red());
                    }
                }
                VmStatus::Success | VmStatus::Failed => {
                    let status_str = if vm.status == VmStatus::Success {
                        vm.status.display_name().green()
                    } else {
                        vm.status.display_name().red()
                    };
                    let icon = if vm.status == VmStatus::Success {
                        "✓".green()
                    } else {
                        "✗".red()
                    };
                    println!("{} 虚拟机 {}: {}", icon, vm.vm_name, status_str);

                    println!(
                        "   {:<28} {:<52} {:<8}",
                        "磁盘".bold(),
                        "快照".bold(),
                        "状态".bold()
                    );
                    for disk in vm.disk_results() {
                        print_disk_line(disk);
                    }
                }
            }
            println!();
        }
    }

    // 多虚拟机模式额外输出汇总块
    if summary.multi {
        println!("📊 运行汇总:");
        println!("   变更单号: {}", summary.ticket);
        println!("   虚拟机总数: {}", summary.total_vms);
        println!("   成功: {}", summary.succeeded_vms.to_string().green());
        println!("   失败: {}", summary.failed_vms.to_string().red());
        println!("   创建快照: {}", summary.snapshots_created);
        println!("   跳过快照: {}", summary.snapshots_skipped);
    }
}

/// 输出单块磁盘的结果行
fn print_disk_line(disk: &DiskResult) {
    let disk_label = match disk.lun {
        Some(lun) => format!("{} (LUN {})", disk.disk_name, lun),
        None => disk.disk_name.clone(),
    };

    // 创建失败时不展示推导名称
    let snapshot_name = if disk.outcome == DiskOutcome::Failed {
        "N/A"
    } else {
        disk.snapshot_name.as_str()
    };

    let status_str = match disk.outcome {
        DiskOutcome::Created => disk.outcome.display_name().green(),
        DiskOutcome::SkippedExists => disk.outcome.display_name().yellow(),
        DiskOutcome::Failed => disk.outcome.display_name().red(),
    };

    println!("   {:<28} {:<52} {}", disk_label, snapshot_name, status_str);

    if let Some(error) = &disk.error {
        println!("      错误: {}", error.red());
    }
}

/// 列出资源组内的快照
async fn list(config_path: &str, resource_group: &str) -> Result<()> {
    println!("📋 快照列表\n");

    let config = CliConfig::load(config_path)?;
    let cloud = config
        .cloud
        .as_ref()
        .context("配置文件中未找到云平台配置")?;

    let client = create_cloud_client(cloud).await?;
    let snapshots = client.snapshot().list(resource_group).await?;

    if snapshots.is_empty() {
        println!("{} 资源组 {} 内没有快照", "ℹ".yellow(), resource_group);
        return Ok(());
    }

    println!(
        "{:<56} {:<12} {:<12} {:<22}",
        "名称".bold(),
        "区域".bold(),
        "状态".bold(),
        "创建时间".bold()
    );
    println!("{}", "-".repeat(104));

    for snapshot in &snapshots {
        let (state, created) = snapshot
            .properties
            .as_ref()
            .map(|p| {
                (
                    p.provisioning_state.as_deref().unwrap_or("").to_string(),
                    p.time_created.as_deref().unwrap_or("").to_string(),
                )
            })
            .unwrap_or_default();

        println!(
            "{:<56} {:<12} {:<12} {:<22}",
            snapshot.name, snapshot.location, state, created
        );
    }

    println!("\n总计: {} 个快照", snapshots.len());

    Ok(())
}
