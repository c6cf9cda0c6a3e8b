//! 核心层：错误、响应格式化、时间和 ID

pub mod clock;
pub mod error;
pub mod id;
pub mod response;
