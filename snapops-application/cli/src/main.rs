//! SnapOps CLI 应用

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "snapops")]
#[command(about = "SnapOps - 云虚拟机磁盘快照自动化工具", long_about = None)]
#[command(version)]
struct Cli {
    /// 日志级别
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 快照管理
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },

    /// 虚拟机查询
    Vm {
        #[command(subcommand)]
        action: VmAction,
    },
}

#[derive(Subcommand)]
pub enum SnapshotAction {
    /// 执行快照任务
    Create {
        /// 配置文件路径
        #[arg(short, long, default_value = "config/snapops.toml")]
        config: String,

        /// 变更单号，嵌入每个快照名称
        #[arg(short, long)]
        ticket: String,

        /// 源虚拟机所在资源组
        #[arg(short = 'g', long)]
        resource_group: String,

        /// 目标虚拟机名称（单个）
        #[arg(long, conflicts_with = "vms")]
        vm: Option<String>,

        /// 目标虚拟机列表（逗号分隔）
        #[arg(long, conflicts_with = "vm")]
        vms: Option<String>,

        /// 快照落地资源组（缺省为源资源组）
        #[arg(long)]
        snapshot_resource_group: Option<String>,
    },

    /// 列出资源组内的快照
    List {
        /// 配置文件路径
        #[arg(short, long, default_value = "config/snapops.toml")]
        config: String,

        /// 资源组名称
        #[arg(short = 'g', long)]
        resource_group: String,
    },
}

#[derive(Subcommand)]
pub enum VmAction {
    /// 显示虚拟机及其磁盘
    Show {
        /// 配置文件路径
        #[arg(short, long, default_value = "config/snapops.toml")]
        config: String,

        /// 资源组名称
        #[arg(short = 'g', long)]
        resource_group: String,

        /// 虚拟机名称
        #[arg(long)]
        vm: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // 日志走 stderr，报告输出走 stdout
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("SnapOps CLI 启动");

    // 处理命令
    match cli.command {
        Commands::Snapshot { action } => commands::snapshot::handle(action).await?,
        Commands::Vm { action } => commands::vm::handle(action).await?,
    }

    Ok(())
}
