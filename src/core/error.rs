//! 核心错误处理模块

use axum::http::StatusCode;

use crate::infrastructure::config::ConfigError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("用户 {0} 不存在")]
    NotFound(String),
    #[error("无效的状态值: {0}，有效值: active, pending, inactive")]
    InvalidStatus(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoreError {
    /// 模拟响应中使用的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            CoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 错误代码，例如 `NOT_FOUND`
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::InvalidStatus(_) => "BAD_REQUEST",
            CoreError::Config(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            CoreError::NotFound("42".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoreError::InvalidStatus("archived".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = CoreError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "用户 abc 不存在");
        assert_eq!(err.code(), "NOT_FOUND");
    }
}
