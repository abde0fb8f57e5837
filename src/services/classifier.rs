//! 病情分类器
//!
//! 将自由文本症状描述映射到固定的病情标签。
//! 纯函数：大小写不敏感的子串匹配，按优先级顺序首个命中即返回。

use crate::models::condition::ConditionTag;

/// 识别文本的主要病情标签
///
/// 按 fever → headache → cough → cold → stomach_upset → pain 的固定顺序
/// 逐个标签测试其关键词，无命中则归为 General。永不失败。
pub fn classify(text: &str) -> ConditionTag {
    let text = text.to_lowercase();

    for tag in ConditionTag::PRIORITY {
        if tag.keywords().iter().any(|kw| text.contains(kw)) {
            return tag;
        }
    }

    ConditionTag::General
}

/// 将病情描述映射到药品数据库键
///
/// suggest_medicine 使用的窄版映射，只覆盖有药品条目的标签；
/// 未命中返回 None，由调用方转为药剂师转介文案。
pub fn medicine_key(text: &str) -> Option<ConditionTag> {
    let text = text.to_lowercase();

    let contains_any = |words: &[&str]| words.iter().any(|w| text.contains(w));

    if contains_any(&["fever", "temperature"]) {
        Some(ConditionTag::Fever)
    } else if contains_any(&["headache", "head pain"]) {
        Some(ConditionTag::Headache)
    } else if contains_any(&["pain", "ache"]) {
        Some(ConditionTag::Pain)
    } else if contains_any(&["cold", "cough"]) {
        Some(ConditionTag::Cold)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("I have fever", ConditionTag::Fever)]
    #[case("my temperature is high", ConditionTag::Fever)]
    #[case("terrible migraine today", ConditionTag::Headache)]
    #[case("coughing all night", ConditionTag::Cough)]
    #[case("runny nose and sneezing", ConditionTag::Cold)]
    #[case("nausea after dinner", ConditionTag::StomachUpset)]
    #[case("my knee hurts", ConditionTag::Pain)]
    #[case("feeling a bit off", ConditionTag::General)]
    #[case("", ConditionTag::General)]
    fn test_classify(#[case] text: &str, #[case] expected: ConditionTag) {
        assert_eq!(classify(text), expected);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("FEVER and CHILLS"), ConditionTag::Fever);
    }

    #[test]
    fn test_fever_wins_over_headache() {
        // 表序即决胜策略：fever 先于 headache 检查
        assert_eq!(classify("headache and fever"), ConditionTag::Fever);
        assert_eq!(classify("fever with headache"), ConditionTag::Fever);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "persistent cough with sore throat";
        assert_eq!(classify(text), classify(text));
    }

    #[rstest]
    #[case("fever", Some(ConditionTag::Fever))]
    #[case("head pain", Some(ConditionTag::Headache))]
    #[case("backache", Some(ConditionTag::Pain))]
    #[case("cough", Some(ConditionTag::Cold))]
    #[case("diarrhea", None)]
    #[case("insomnia", None)]
    fn test_medicine_key(#[case] text: &str, #[case] expected: Option<ConditionTag>) {
        assert_eq!(medicine_key(text), expected);
    }

    #[test]
    fn test_medicine_key_cough_maps_to_cold() {
        // 药品表没有 cough 条目，咳嗽归入 cold 的对症用药
        assert_eq!(medicine_key("dry cough"), Some(ConditionTag::Cold));
    }
}
