//! 用户记录数据模型

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

/// 用户状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Pending,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::Pending, Status::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "pending" => Ok(Status::Pending),
            "inactive" => Ok(Status::Inactive),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

/// 用户记录
///
/// `id` 和 `created_at` 在创建后不可变，只能通过 [`UserRecord::apply`] 修改其余字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    id: String,
    pub name: String,
    pub email: String,
    pub status: Status,
    created_at: NaiveDate,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        status: Status,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            status,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    /// 合并部分更新，未提供的字段保持原值
    pub fn apply(&mut self, fields: &UpdateUserRequest) {
        if let Some(name) = &fields.name {
            self.name = name.clone();
        }
        if let Some(email) = &fields.email {
            self.email = email.clone();
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
    }
}

/// 创建用户请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub status: Status,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status,
        }
    }
}

/// 更新用户请求，字段顺序即响应中的输出顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl UpdateUserRequest {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.status.is_none()
    }
}

impl From<CreateUserRequest> for UpdateUserRequest {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: Some(req.name),
            email: Some(req.email),
            status: Some(req.status),
        }
    }
}

/// 仪表盘统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("active".parse::<Status>().unwrap(), Status::Active);
        assert_eq!(" Pending ".parse::<Status>().unwrap(), Status::Pending);
        assert!(matches!(
            "archived".parse::<Status>(),
            Err(CoreError::InvalidStatus(v)) if v == "archived"
        ));
    }

    #[test]
    fn test_status_default_is_active() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com"}"#).unwrap();
        assert_eq!(req.status, Status::Active);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = UserRecord::new(
            "1",
            "John Doe",
            "john.doe@example.com",
            Status::Active,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","name":"John Doe","email":"john.doe@example.com","status":"active","createdAt":"2024-01-15"}"#
        );
    }

    #[test]
    fn test_apply_keeps_unspecified_fields() {
        let mut record = UserRecord::new(
            "7",
            "Bob",
            "bob@example.com",
            Status::Inactive,
            NaiveDate::from_ymd_opt(2024, 1, 13).unwrap(),
        );
        record.apply(&UpdateUserRequest::default().status(Status::Active));
        assert_eq!(record.name, "Bob");
        assert_eq!(record.email, "bob@example.com");
        assert_eq!(record.status, Status::Active);
        assert_eq!(record.id(), "7");
    }
}
