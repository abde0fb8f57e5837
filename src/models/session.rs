use chrono::{DateTime, Utc};
use serde::Serialize;

/// 会话记录
///
/// 每次成功的工具调用都会产生一条记录，由会话日志独占持有。
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    /// 工具名称
    #[serde(rename = "type")]
    pub record_type: &'static str,
    /// 原始输入
    pub input: String,
    /// 序列化后的输出
    pub output: serde_json::Value,
    /// 记录时间
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    /// 创建新会话记录，时间戳取当前时刻
    pub fn new(record_type: &'static str, input: &str, output: serde_json::Value) -> Self {
        Self {
            record_type,
            input: input.to_string(),
            output,
            timestamp: Utc::now(),
        }
    }
}
