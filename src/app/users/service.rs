//! 用户记录存储
//!
//! 内存中的有序集合，保持插入顺序，`id` 唯一。

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::model::{CreateUserRequest, Status, Summary, UpdateUserRequest, UserRecord};
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{CoreError, Result};
use crate::core::id::{IdGenerator, IdStrategy, UuidIdGenerator};

pub struct RecordStore {
    records: Vec<UserRecord>,
    ids: Box<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    /// 空存储，使用 UUID 和系统时钟
    pub fn new() -> Self {
        Self::with_parts(Vec::new(), Box::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    /// 用给定的初始记录构造；重复的 `id` 只保留第一条
    pub fn with_parts(
        records: Vec<UserRecord>,
        ids: Box<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if record.id().is_empty() || !seen.insert(record.id().to_string()) {
                warn!("忽略无效或重复的记录 ID: {:?}", record.id());
                continue;
            }
            unique.push(record);
        }

        Self {
            records: unique,
            ids,
            clock,
        }
    }

    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self::with_parts(records, Box::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    /// 带三条示例记录的存储
    pub fn seeded(strategy: IdStrategy, clock: Arc<dyn Clock>) -> Self {
        let records = sample_records();
        let start_after = highest_numeric_id(&records);
        let store = Self::with_parts(records, strategy.generator(start_after), clock);
        info!("✅ 已初始化 {} 个示例用户", store.len());
        store
    }

    pub fn create(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        status: Status,
    ) -> UserRecord {
        let mut id = self.ids.next_id();
        while id.is_empty() || self.contains(&id) {
            warn!("生成的 ID {:?} 已存在，重新生成", id);
            id = self.ids.next_id();
        }

        let record = UserRecord::new(id, name, email, status, self.clock.today());
        self.records.push(record.clone());
        info!(id = record.id(), status = %record.status, "用户创建成功");
        record
    }

    pub fn create_from(&mut self, req: CreateUserRequest) -> UserRecord {
        self.create(req.name, req.email, req.status)
    }

    pub fn read(&self, id: &str) -> Result<&UserRecord> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| {
                debug!("用户 {} 不存在", id);
                CoreError::NotFound(id.to_string())
            })
    }

    pub fn update(&mut self, id: &str, fields: &UpdateUserRequest) -> Result<UserRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        record.apply(fields);
        info!(id, "用户更新成功");
        Ok(record.clone())
    }

    /// 删除记录，返回是否真的删除了；不存在时不做任何事
    pub fn delete(&mut self, id: &str) -> bool {
        match self.records.iter().position(|record| record.id() == id) {
            Some(index) => {
                self.records.remove(index);
                info!(id, "用户删除成功");
                true
            }
            None => {
                debug!("删除的用户 {} 不存在，忽略", id);
                false
            }
        }
    }

    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    pub fn count_by_status(&self, status: Status) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .count()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.len(),
            active: self.count_by_status(Status::Active),
            pending: self.count_by_status(Status::Pending),
            inactive: self.count_by_status(Status::Inactive),
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

/// 示例数据
pub fn sample_records() -> Vec<UserRecord> {
    let date = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default();
    vec![
        UserRecord::new("1", "John Doe", "john.doe@example.com", Status::Active, date(15)),
        UserRecord::new("2", "Jane Smith", "jane.smith@example.com", Status::Pending, date(14)),
        UserRecord::new("3", "Bob Johnson", "bob.johnson@example.com", Status::Inactive, date(13)),
    ]
}

fn highest_numeric_id(records: &[UserRecord]) -> u64 {
    records
        .iter()
        .filter_map(|record| record.id().parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::id::SequentialIdGenerator;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn seeded() -> RecordStore {
        RecordStore::seeded(IdStrategy::Sequential, Arc::new(FixedClock::at_date(today())))
    }

    #[test]
    fn test_seeded_counts() {
        let store = seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.summary(),
            Summary {
                total: 3,
                active: 1,
                pending: 1,
                inactive: 1
            }
        );
    }

    #[test]
    fn test_create_appends_with_next_sequential_id() {
        let mut store = seeded();
        let record = store.create("Alice", "a@x.com", Status::Active);
        assert_eq!(record.id(), "4");
        assert_eq!(record.created_at(), today());
        assert_eq!(store.list().last(), Some(&record));
        assert_eq!(store.count_by_status(Status::Active), 2);
    }

    #[test]
    fn test_create_accepts_empty_fields() {
        let mut store = seeded();
        let record = store.create("", "", Status::Pending);
        assert_eq!(store.read(record.id()).unwrap().name, "");
    }

    #[test]
    fn test_create_skips_colliding_ids() {
        // 计数器从 1 开始，会和示例数据冲突
        let mut store = RecordStore::with_parts(
            sample_records(),
            Box::new(SequentialIdGenerator::new()),
            Arc::new(FixedClock::at_date(today())),
        );
        let record = store.create("Alice", "a@x.com", Status::Active);
        assert_eq!(record.id(), "4");
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = seeded();
        let before = store.list().to_vec();
        let err = store
            .update("missing", &UpdateUserRequest::default().name("X"))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(id) if id == "missing"));
        assert_eq!(store.list(), &before[..]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = seeded();
        assert!(store.delete("2"));
        assert!(!store.delete("2"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.count_by_status(Status::Pending), 0);
    }

    #[test]
    fn test_with_records_drops_duplicates() {
        let mut records = sample_records();
        records.push(UserRecord::new("1", "Dup", "dup@example.com", Status::Pending, today()));
        let store = RecordStore::with_records(records);
        assert_eq!(store.len(), 3);
        assert_eq!(store.read("1").unwrap().name, "John Doe");
    }
}
