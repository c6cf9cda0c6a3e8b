//! 记录 ID 生成器

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID 生成策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// UUID v4，几乎不会冲突
    #[default]
    Uuid,
    /// 单调递增计数器，结果可预测
    Sequential,
}

impl IdStrategy {
    /// 按策略构造生成器；`start_after` 只对计数器有效
    pub fn generator(self, start_after: u64) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::starting_after(start_after)),
        }
    }
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 `last + 1` 开始编号
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        (self.last.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::starting_after(3);
        assert_eq!(ids.next_id(), "4");
        assert_eq!(ids.next_id(), "5");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids = UuidIdGenerator;
        let set: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(set.len(), 100);
    }

    #[test]
    fn test_strategy_from_toml_value() {
        #[derive(Deserialize)]
        struct Holder {
            strategy: IdStrategy,
        }
        let holder: Holder = toml::from_str("strategy = \"sequential\"").unwrap();
        assert_eq!(holder.strategy, IdStrategy::Sequential);
    }
}
