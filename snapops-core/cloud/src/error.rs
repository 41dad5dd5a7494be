//! 云平台错误定义

use thiserror::Error;

/// 云平台错误类型
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("HTTP 错误: {0}")]
    HttpError(String),

    #[error("认证错误: {0}")]
    AuthError(String),

    #[error("API 错误 [{0}]: {1}")]
    ApiError(u16, String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("资源不存在: {0}")]
    NotFound(String),
}

/// 云平台结果类型
pub type Result<T> = std::result::Result<T, CloudError>;
