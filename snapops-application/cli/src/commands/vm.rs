//! 虚拟机查询命令

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::common::create_cloud_client;
use crate::config::CliConfig;
use crate::VmAction;

pub async fn handle(action: VmAction) -> Result<()> {
    match action {
        VmAction::Show {
            config,
            resource_group,
            vm,
        } => show(&config, &resource_group, &vm).await,
    }
}

/// 显示虚拟机及其磁盘
async fn show(config_path: &str, resource_group: &str, vm_name: &str) -> Result<()> {
    println!("📋 虚拟机磁盘详情\n");

    let config = CliConfig::load(config_path)?;
    let cloud = config
        .cloud
        .as_ref()
        .context("配置文件中未找到云平台配置")?;

    let client = create_cloud_client(cloud).await?;
    let vm = client
        .vm()
        .get(resource_group, vm_name)
        .await
        .context(format!("未找到虚拟机: {}/{}", resource_group, vm_name))?;

    println!("虚拟机: {} ({})\n", vm.name.yellow(), vm.location);

    let profile = &vm.properties.storage_profile;

    println!(
        "{:<8} {:<28} {:<8} {}",
        "类型".bold(),
        "磁盘名称".bold(),
        "LUN".bold(),
        "磁盘 ID".bold()
    );
    println!("{}", "-".repeat(100));

    println!(
        "{:<8} {:<28} {:<8} {}",
        "OS", profile.os_disk.name, "-", profile.os_disk.managed_disk.id
    );

    for disk in &profile.data_disks {
        println!(
            "{:<8} {:<28} {:<8} {}",
            "数据", disk.name, disk.lun, disk.managed_disk.id
        );
    }

    println!(
        "\n总计: 1 个 OS 盘, {} 个数据盘",
        profile.data_disks.len()
    );

    Ok(())
}
