//! # API 仪表盘
//!
//! 内存中的用户记录存储，模拟 RESTful CRUD 操作：
//! - `RecordStore` 维护有序的用户记录集合并提供统计
//! - `ResponseFormatter` 把每次操作的结果渲染成 HTTP 风格的文本
//! - `UserHandler` 把两者串起来，供展示层调用
//!
//! 没有服务器，也没有任何网络传输。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::users::handler::UserHandler;
pub use crate::app::users::model::{CreateUserRequest, Status, Summary, UpdateUserRequest, UserRecord};
pub use crate::app::users::service::RecordStore;
pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::error::{CoreError, Result};
pub use crate::core::id::{IdGenerator, IdStrategy, SequentialIdGenerator, UuidIdGenerator};
pub use crate::core::response::ResponseFormatter;
pub use crate::infrastructure::config::{Config, ConfigError};
