//! 用户处理器
//!
//! 调用存储操作，再把结果交给 [`ResponseFormatter`] 生成展示文本。

use std::sync::Arc;

use axum::http::Method;
use tracing::info;

use super::model::{CreateUserRequest, Summary, UpdateUserRequest, UserRecord};
use super::service::RecordStore;
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::Result;
use crate::core::response::ResponseFormatter;
use crate::infrastructure::config::Config;

#[derive(Debug)]
pub struct UserHandler {
    store: RecordStore,
    formatter: ResponseFormatter,
    last_response: String,
}

impl UserHandler {
    pub fn new(store: RecordStore, formatter: ResponseFormatter) -> Self {
        Self {
            store,
            formatter,
            last_response: String::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    pub fn from_config_with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let strategy = config.store.id_strategy;
        let store = if config.store.seed_sample_records {
            RecordStore::seeded(strategy, clock.clone())
        } else {
            RecordStore::with_parts(Vec::new(), strategy.generator(0), clock.clone())
        };
        let formatter = ResponseFormatter::new(config.api.base_path.clone(), clock);
        Self::new(store, formatter)
    }

    pub fn create(&mut self, req: CreateUserRequest) -> (UserRecord, &str) {
        let record = self.store.create_from(req);
        let text = self.formatter.format_created(&record);
        (record, self.respond(text))
    }

    /// 读取记录（编辑前的预填充）
    pub fn read(&mut self, id: &str) -> Result<&str> {
        let formatted = self
            .store
            .read(id)
            .map(|record| self.formatter.format_read(record));

        match formatted {
            Ok(text) => Ok(self.respond(text)),
            Err(err) => {
                let path = self.formatter.item_path(id);
                let text = self.formatter.format_error(&Method::GET, &path, &err);
                self.respond(text);
                Err(err)
            }
        }
    }

    pub fn update(&mut self, id: &str, fields: UpdateUserRequest) -> Result<(UserRecord, &str)> {
        match self.store.update(id, &fields) {
            Ok(record) => {
                let text = self.formatter.format_updated(id, &fields);
                Ok((record, self.respond(text)))
            }
            Err(err) => {
                let path = self.formatter.item_path(id);
                let text = self.formatter.format_error(&Method::PUT, &path, &err);
                self.respond(text);
                Err(err)
            }
        }
    }

    /// 删除记录；不存在时同样返回 204 响应
    pub fn delete(&mut self, id: &str) -> (bool, &str) {
        let removed = self.store.delete(id);
        let text = self.formatter.format_deleted(id);
        (removed, self.respond(text))
    }

    pub fn simulate_api_call(&mut self, method: &str, path: &str) -> &str {
        info!("模拟 API 调用: {} {}", method, path);
        let text = self.formatter.format_query(method, path, self.store.list());
        self.respond(text)
    }

    pub fn last_response(&self) -> &str {
        &self.last_response
    }

    pub fn summary(&self) -> Summary {
        self.store.summary()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn formatter(&self) -> &ResponseFormatter {
        &self.formatter
    }

    fn respond(&mut self, text: String) -> &str {
        self.last_response = text;
        &self.last_response
    }
}
