use serde::{Deserialize, Serialize};

/// 分诊级别
///
/// 驱动建议的下一步行动。Emergency 由红旗关键词短路判定，
/// 其余级别由程度/持续性词汇决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageLevel {
    /// 急诊：立即就医
    Emergency,
    /// 紧急：24 小时内就医
    Urgent,
    /// 常规：1-2 周内就医
    Routine,
    /// 自我照护
    SelfCare,
}

impl TriageLevel {
    /// 级别的人类可读说明
    pub fn description(&self) -> &'static str {
        match self {
            TriageLevel::Emergency => "Immediate medical attention required - Call 102/108",
            TriageLevel::Urgent => "See a doctor within 24 hours",
            TriageLevel::Routine => "Schedule appointment with doctor within 1-2 weeks",
            TriageLevel::SelfCare => "Can be managed with self-care and monitoring",
        }
    }

    /// 级别对应的随访建议
    pub fn follow_up_advice(&self) -> &'static str {
        match self {
            TriageLevel::Emergency => "Seek immediate medical attention",
            TriageLevel::Urgent => "See a doctor within 24 hours",
            TriageLevel::Routine => {
                "Schedule appointment with doctor within 1-2 weeks if symptoms persist"
            }
            TriageLevel::SelfCare => {
                "Monitor symptoms. See doctor if they worsen or persist beyond 3-5 days"
            }
        }
    }
}

/// 紧急联系方式（印度急救号码）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContacts {
    /// 救护车
    pub ambulance: &'static str,
    /// 警察
    pub police: &'static str,
    /// 消防
    pub fire: &'static str,
}

impl Default for EmergencyContacts {
    fn default() -> Self {
        Self {
            ambulance: "102 / 108",
            police: "100",
            fire: "101",
        }
    }
}
