//! 时间来源

use chrono::{DateTime, NaiveDate, Utc};

/// 提供当前时间，记录的 `createdAt` 和查询响应的时间戳都从这里取
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// 当前日历日期
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定时钟，测试用
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// 固定在某一天的 UTC 零点
    pub fn at_date(date: NaiveDate) -> Self {
        Self {
            instant: date.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_today() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::at_date(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().to_rfc3339(), "2024-02-29T00:00:00+00:00");
    }
}
