//! 配置加载

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::id::IdStrategy;
use crate::core::response::DEFAULT_BASE_PATH;

/// 仪表盘配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 存储配置
    pub store: StoreConfig,
    /// 模拟 API 配置
    pub api: ApiConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// 存储配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 是否预置示例数据
    pub seed_sample_records: bool,
    /// ID 生成策略 ("uuid" 或 "sequential")
    pub id_strategy: IdStrategy,
}

/// 模拟 API 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// 响应中显示的资源路径
    pub base_path: String,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_records: true,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_path.is_empty() {
            return Err(ConfigError::Validation("API 路径不能为空".to_string()));
        }
        if !self.api.base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "API 路径必须以 / 开头: {}",
                self.api.base_path
            )));
        }

        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, VALID_LEVELS
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 依次尝试候选路径，找不到时使用默认配置
pub fn load_config<P: AsRef<Path>>(paths: &[P]) -> Result<Config, ConfigError> {
    let config = match paths.iter().find(|path| path.as_ref().exists()) {
        Some(path) => {
            info!("从配置文件加载: {}", path.as_ref().display());
            Config::load_from_file(path)?
        }
        None => {
            info!("未找到配置文件，使用默认配置");
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}
