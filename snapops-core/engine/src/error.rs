//! 引擎错误定义
//!
//! 这里只定义致命错误：参数校验失败和会话失效都会在处理任何
//! 虚拟机之前中止整个运行。单个虚拟机或单块磁盘的失败不是错误，
//! 而是记录在运行结果里的一种结局。

use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("参数错误: {0}")]
    InvalidParams(String),

    #[error("未找到活动会话，请先登录")]
    NoSession,

    #[error("凭证已过期或无效: {0}")]
    AuthExpired(String),
}

/// 引擎结果类型
pub type Result<T> = std::result::Result<T, EngineError>;
