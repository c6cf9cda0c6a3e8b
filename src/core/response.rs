//! 核心响应处理模块
//!
//! 生成模拟的 HTTP 响应文本，只用于展示，不做任何网络传输。

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde::Serialize;

use crate::app::users::model::{UpdateUserRequest, UserRecord};
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::CoreError;

pub const DEFAULT_BASE_PATH: &str = "/api/users";

/// 查询响应结构
#[derive(Serialize)]
pub struct ApiResponse<'a, T> {
    pub method: &'a str,
    pub endpoint: &'a str,
    pub status: String,
    pub timestamp: String,
    pub data: T,
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

#[derive(Serialize)]
struct UpdatedBody<'a> {
    id: &'a str,
    #[serde(flatten)]
    fields: &'a UpdateUserRequest,
}

#[derive(Clone)]
pub struct ResponseFormatter {
    base_path: String,
    clock: Arc<dyn Clock>,
}

impl ResponseFormatter {
    pub fn new(base_path: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            base_path: base_path.into().trim_end_matches('/').to_string(),
            clock,
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `{base}/{id}`
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.base_path, id)
    }

    /// `POST /api/users - Status: 201 Created` 加新记录
    pub fn format_created(&self, record: &UserRecord) -> String {
        with_body(
            status_line(&Method::POST, &self.base_path, StatusCode::CREATED),
            record,
        )
    }

    pub fn format_read(&self, record: &UserRecord) -> String {
        with_body(
            status_line(&Method::GET, &self.item_path(record.id()), StatusCode::OK),
            record,
        )
    }

    /// 输出 `id` 与提交字段的合并结果，不是存储中的完整记录
    pub fn format_updated(&self, id: &str, fields: &UpdateUserRequest) -> String {
        with_body(
            status_line(&Method::PUT, &self.item_path(id), StatusCode::OK),
            &UpdatedBody { id, fields },
        )
    }

    pub fn format_deleted(&self, id: &str) -> String {
        status_line(&Method::DELETE, &self.item_path(id), StatusCode::NO_CONTENT)
    }

    /// 带时间戳和当前完整集合的查询响应
    pub fn format_query(&self, method: &str, path: &str, snapshot: &[UserRecord]) -> String {
        let status = StatusCode::OK.to_string();
        let response = ApiResponse {
            method,
            endpoint: path,
            status: status.clone(),
            timestamp: self.clock.now().to_rfc3339(),
            data: snapshot,
        };
        with_body(format!("{} {} - Status: {}", method, path, status), &response)
    }

    pub fn format_error(&self, method: &Method, path: &str, err: &CoreError) -> String {
        let status = err.status_code();
        let response = ErrorResponse {
            error: err.code().to_string(),
            message: err.to_string(),
            code: status.as_u16(),
            timestamp: self.clock.now().to_rfc3339(),
        };
        with_body(status_line(method, path, status), &response)
    }
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH, Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for ResponseFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseFormatter")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

fn status_line(method: &Method, path: &str, status: StatusCode) -> String {
    format!("{} {} - Status: {}", method, path, status)
}

fn with_body<T: Serialize + ?Sized>(head: String, body: &T) -> String {
    match serde_json::to_string_pretty(body) {
        Ok(json) => format!("{}\n{}", head, json),
        // 这些结构都只含字符串和日期，序列化不会失败
        Err(e) => format!("{}\n<{}>", head, e),
    }
}
