//! 日志基础设施

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    pub fn init(level: Level) {
        Self::init_with_filter(&level.to_string().to_lowercase());
    }

    /// 设置了 `RUST_LOG` 时以环境变量为准；重复初始化会被忽略
    pub fn init_with_filter(directive: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directive));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }
}
