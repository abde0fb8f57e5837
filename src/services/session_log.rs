//! 会话日志
//!
//! 有界的追加式请求/响应记录。容量封顶后按 FIFO 淘汰最旧条目。
//! axum 的处理器并发执行，内部用 RwLock 串行化写入，避免更新丢失。

use parking_lot::RwLock;
use std::collections::VecDeque;

use crate::models::session::SessionRecord;

/// 默认保留的记录数
pub const DEFAULT_CAPACITY: usize = 100;

/// 默认查询条数
pub const DEFAULT_LIMIT: usize = 10;

/// 有界会话日志
pub struct SessionLog {
    records: RwLock<VecDeque<SessionRecord>>,
    capacity: usize,
}

impl SessionLog {
    /// 创建指定容量的会话日志
    pub fn new(capacity: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// 追加一条记录，必要时淘汰最旧条目
    ///
    /// 永不失败。
    pub fn append(&self, record: SessionRecord) {
        let mut records = self.records.write();
        records.push_back(record);
        while records.len() > self.capacity {
            records.pop_front();
        }
    }

    /// 返回最近 `limit` 条记录（时间升序）
    pub fn recent(&self, limit: usize) -> Vec<SessionRecord> {
        let records = self.records.read();
        let skip = records.len().saturating_sub(limit);
        records.iter().skip(skip).cloned().collect()
    }

    /// 当前保留的记录总数
    pub fn total(&self) -> usize {
        self.records.read().len()
    }

    /// 日志容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(n: usize) -> SessionRecord {
        SessionRecord::new("symptom_analysis", &format!("input {}", n), json!({"n": n}))
    }

    #[test]
    fn test_append_and_recent() {
        let log = SessionLog::default();
        for n in 0..3 {
            log.append(record(n));
        }

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].input, "input 1");
        assert_eq!(recent[1].input, "input 2");
        assert_eq!(log.total(), 3);
    }

    #[test]
    fn test_cap_evicts_oldest_fifo() {
        let log = SessionLog::default();
        for n in 0..105 {
            log.append(record(n));
        }

        assert_eq!(log.total(), 100);
        let all = log.recent(100);
        // 最旧的 5 条被淘汰，保留 5..=104 且顺序不变
        assert_eq!(all[0].input, "input 5");
        assert_eq!(all[99].input, "input 104");
    }

    #[test]
    fn test_recent_default_limit_semantics() {
        let log = SessionLog::default();
        for n in 0..20 {
            log.append(record(n));
        }

        let recent = log.recent(DEFAULT_LIMIT);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].input, "input 10");
    }

    #[test]
    fn test_recent_larger_than_total() {
        let log = SessionLog::new(10);
        log.append(record(0));
        assert_eq!(log.recent(50).len(), 1);
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        use std::sync::Arc;

        let log = Arc::new(SessionLog::new(1000));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let log = log.clone();
                std::thread::spawn(move || {
                    for n in 0..50 {
                        log.append(record(n));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(log.total(), 400);
    }
}
