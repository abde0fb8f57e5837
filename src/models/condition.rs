use serde::{Deserialize, Serialize};

/// 病情分类标签
///
/// 固定枚举，进程启动时即确定，用于索引药品/家庭疗法/警示信号表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionTag {
    /// 发热
    Fever,
    /// 头痛
    Headache,
    /// 咳嗽
    Cough,
    /// 感冒
    Cold,
    /// 肠胃不适
    StomachUpset,
    /// 疼痛
    Pain,
    /// 一般情况（兜底分类）
    General,
}

impl ConditionTag {
    /// 分类优先级顺序（不含 General 兜底）
    ///
    /// 顺序即决胜策略：同时包含 fever 和 headache 关键词的文本归为 Fever。
    pub const PRIORITY: [ConditionTag; 6] = [
        ConditionTag::Fever,
        ConditionTag::Headache,
        ConditionTag::Cough,
        ConditionTag::Cold,
        ConditionTag::StomachUpset,
        ConditionTag::Pain,
    ];

    /// 标签对应的关键词子串（小写）
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ConditionTag::Fever => &["fever", "temperature", "hot", "burning"],
            ConditionTag::Headache => &["headache", "head pain", "migraine"],
            ConditionTag::Cough => &["cough", "coughing"],
            ConditionTag::Cold => &["cold", "runny nose", "sore throat", "sneezing"],
            ConditionTag::StomachUpset => &["stomach", "nausea", "vomiting", "diarrhea"],
            ConditionTag::Pain => &["pain", "ache", "hurt"],
            ConditionTag::General => &[],
        }
    }

    /// 标签的 snake_case 名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionTag::Fever => "fever",
            ConditionTag::Headache => "headache",
            ConditionTag::Cough => "cough",
            ConditionTag::Cold => "cold",
            ConditionTag::StomachUpset => "stomach_upset",
            ConditionTag::Pain => "pain",
            ConditionTag::General => "general",
        }
    }
}

impl std::fmt::Display for ConditionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ConditionTag {
    fn default() -> Self {
        ConditionTag::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&ConditionTag::StomachUpset).unwrap();
        assert_eq!(json, "\"stomach_upset\"");
    }

    #[test]
    fn test_as_str_matches_serde_names() {
        for tag in ConditionTag::PRIORITY {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }
}
