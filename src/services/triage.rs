//! 分诊引擎
//!
//! 红旗关键词扫描与程度/持续性分诊。红旗扫描独立于病情分类，
//! 且先于一切分类相关逻辑执行：危及生命的症状可能与任何病情标签共存。

use crate::models::knowledge::{EMERGENCY_KEYWORDS, PERSISTENCE_KEYWORDS, SEVERITY_KEYWORDS};
use crate::models::triage::TriageLevel;

/// 扫描文本中的红旗关键词
///
/// 返回所有命中的关键词（不止首个），顺序与红旗表一致。
pub fn detect_red_flags(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();

    EMERGENCY_KEYWORDS
        .iter()
        .filter(|kw| text.contains(*kw))
        .copied()
        .collect()
}

/// 非急诊路径的分诊判定
///
/// 程度加重词 → Urgent；持续性/高值词 → Routine；否则 SelfCare。
/// 调用方必须先用 [`detect_red_flags`] 排除急诊。永不失败。
pub fn triage(text: &str) -> TriageLevel {
    let text = text.to_lowercase();

    if SEVERITY_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        TriageLevel::Urgent
    } else if PERSISTENCE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        TriageLevel::Routine
    } else {
        TriageLevel::SelfCare
    }
}
