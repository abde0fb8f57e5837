use serde::Serialize;

/// 非处方药建议记录
///
/// 按病情标签索引，字段内容为面向用户的固定文案。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicineRecord {
    /// 药品名称
    pub medicine: &'static str,
    /// 剂量
    pub dose: &'static str,
    /// 每日最大剂量
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_daily: Option<&'static str>,
    /// 服用频率
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<&'static str>,
    /// 附加说明
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<&'static str>,
    /// 用药警告
    pub warning: &'static str,
    /// 年龄限制
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_restriction: Option<&'static str>,
}
