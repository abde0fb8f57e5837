//! 响应组装器
//!
//! 将分类器/分诊引擎的输出与静态知识表组装为各工具的结构化结果，
//! 并把每次成功调用写入会话日志。

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::models::condition::ConditionTag;
use crate::models::knowledge::{
    self, EMERGENCY_DISCLAIMER, GENERAL_REMEDY_FALLBACK, GENERAL_TIPS, GENERIC_REMEDIES,
    MEDICINE_DISCLAIMER, REMEDIES, REMEDY_DISCLAIMER, REMEDY_WARNING, STANDARD_DISCLAIMER,
};
use crate::models::medicine::MedicineRecord;
use crate::models::session::SessionRecord;
use crate::models::triage::{EmergencyContacts, TriageLevel};
use crate::services::session_log::SessionLog;
use crate::services::{classifier, triage};

/// 急诊结果：绕过常规组装路径，不含药品/疗法建议
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyResult {
    /// 分诊级别（恒为 emergency）
    pub triage_level: TriageLevel,
    /// 提示消息
    pub message: &'static str,
    /// 建议行动
    pub action: &'static str,
    /// 命中的全部红旗关键词（表序）
    pub detected_red_flags: Vec<&'static str>,
    /// 紧急联系方式
    pub emergency_contacts: EmergencyContacts,
    /// 免责声明
    pub disclaimer: &'static str,
}

/// 常规分诊结果
#[derive(Debug, Clone, Serialize)]
pub struct StandardTriageResult {
    /// 分诊级别
    pub triage_level: TriageLevel,
    /// 病情标签
    pub condition: ConditionTag,
    /// 症状评估（回显输入）
    pub assessment: String,
    /// 药品建议，无对应条目时省略
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medicine_suggestion: Option<MedicineRecord>,
    /// 家庭疗法
    pub home_remedies: Vec<&'static str>,
    /// 随访建议
    pub follow_up: &'static str,
    /// 警示信号
    pub warning_signs: &'static [&'static str],
    /// 免责声明
    pub disclaimer: &'static str,
}

/// analyze_symptoms 的结果
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// 急诊短路结果
    Emergency(EmergencyResult),
    /// 常规分诊结果
    Standard(StandardTriageResult),
}

impl AnalysisResult {
    /// 结果的分诊级别
    pub fn triage_level(&self) -> TriageLevel {
        match self {
            AnalysisResult::Emergency(_) => TriageLevel::Emergency,
            AnalysisResult::Standard(result) => result.triage_level,
        }
    }
}

/// 药品推荐结果
#[derive(Debug, Clone, Serialize)]
pub struct MedicineRecommendation {
    /// 病情描述（回显输入）
    pub condition: String,
    /// 推荐药品
    pub recommended_medicine: &'static str,
    /// 剂量
    pub dosage: &'static str,
    /// 服用频率
    pub frequency: &'static str,
    /// 每日最大剂量
    pub max_daily: &'static str,
    /// 用药警告（含年龄限制）
    pub warnings: Vec<&'static str>,
    /// 免责声明
    pub disclaimer: &'static str,
}

/// 药剂师转介结果（药品表未命中）
#[derive(Debug, Clone, Serialize)]
pub struct PharmacistReferral {
    /// 转介消息
    pub message: &'static str,
    /// 通用建议
    pub general_advice: &'static str,
    /// 常见非处方药
    pub common_otc: &'static str,
    /// 免责声明
    pub disclaimer: &'static str,
}

/// suggest_medicine 的结果
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MedicineResult {
    /// 命中药品表
    Recommendation(MedicineRecommendation),
    /// 未命中，转介药剂师
    Referral(PharmacistReferral),
}

/// get_remedies 的结果
#[derive(Debug, Clone, Serialize)]
pub struct RemedyResult {
    /// 病情描述（回显输入）
    pub condition: String,
    /// 命中的疗法类目
    pub matched_categories: Vec<ConditionTag>,
    /// 去重后的疗法列表（保持首次出现顺序）
    pub remedies: Vec<&'static str>,
    /// 通用提示
    pub general_tips: Vec<&'static str>,
    /// 免责声明
    pub disclaimer: &'static str,
    /// 警告
    pub warning: &'static str,
}

/// 响应组装服务 trait
pub trait TriageAssembler: Send + Sync {
    /// 分析症状并给出分诊建议
    fn analyze_symptoms(&self, symptoms: &str, age: &str) -> AnalysisResult;

    /// 为病情推荐非处方药
    fn suggest_medicine(&self, condition: &str, age: &str) -> MedicineResult;

    /// 查询病情对应的家庭疗法
    fn get_remedies(&self, condition: &str) -> RemedyResult;
}

/// 响应组装服务实现
pub struct TriageAssemblerImpl {
    session_log: Arc<SessionLog>,
}

impl TriageAssemblerImpl {
    /// 创建新的服务实例
    pub fn new(session_log: Arc<SessionLog>) -> Self {
        Self { session_log }
    }

    fn log_session<T: Serialize>(&self, record_type: &'static str, input: &str, output: &T) {
        let output = serde_json::to_value(output).unwrap_or(serde_json::Value::Null);
        self.session_log
            .append(SessionRecord::new(record_type, input, output));
    }
}

impl TriageAssembler for TriageAssemblerImpl {
    fn analyze_symptoms(&self, symptoms: &str, age: &str) -> AnalysisResult {
        debug!("Analyzing symptoms (age group: {})", age);

        // 红旗扫描先于分类，且不依赖分类结果
        let red_flags = triage::detect_red_flags(symptoms);
        if !red_flags.is_empty() {
            let result = AnalysisResult::Emergency(EmergencyResult {
                triage_level: TriageLevel::Emergency,
                message: "🚨 EMERGENCY DETECTED: Call 102/108 immediately or visit nearest hospital",
                action: "seek_immediate_help",
                detected_red_flags: red_flags,
                emergency_contacts: EmergencyContacts::default(),
                disclaimer: EMERGENCY_DISCLAIMER,
            });
            self.log_session("symptom_analysis", symptoms, &result);
            return result;
        }

        let condition = classifier::classify(symptoms);
        let triage_level = triage::triage(symptoms);

        let home_remedies = knowledge::remedies_for(condition)
            .map(|list| list.to_vec())
            .unwrap_or_else(|| GENERIC_REMEDIES.to_vec());

        let result = AnalysisResult::Standard(StandardTriageResult {
            triage_level,
            condition,
            assessment: format!("Based on symptoms: {}", symptoms),
            medicine_suggestion: knowledge::medicine_for(condition).cloned(),
            home_remedies,
            follow_up: triage_level.follow_up_advice(),
            warning_signs: knowledge::warning_signs_for(condition),
            disclaimer: STANDARD_DISCLAIMER,
        });

        self.log_session("symptom_analysis", symptoms, &result);
        result
    }

    fn suggest_medicine(&self, condition: &str, age: &str) -> MedicineResult {
        debug!("Suggesting medicine (age group: {})", age);

        let record = classifier::medicine_key(condition).and_then(knowledge::medicine_for);

        let result = match record {
            Some(record) => {
                let mut warnings = vec![record.warning];
                if let Some(age_restriction) = record.age_restriction {
                    warnings.push(age_restriction);
                }

                MedicineResult::Recommendation(MedicineRecommendation {
                    condition: condition.to_string(),
                    recommended_medicine: record.medicine,
                    dosage: record.dose,
                    frequency: record.frequency.unwrap_or("As needed"),
                    max_daily: record.max_daily.unwrap_or(""),
                    warnings,
                    disclaimer: MEDICINE_DISCLAIMER,
                })
            }
            None => MedicineResult::Referral(PharmacistReferral {
                message: "Please consult a pharmacist for specific medicine recommendations",
                general_advice: "Only use medicines as directed on the package",
                common_otc: "Paracetamol for fever/pain, ORS for dehydration",
                disclaimer: "This tool only suggests common OTC medicines for basic symptoms",
            }),
        };

        self.log_session("medicine_suggestion", condition, &result);
        result
    }

    fn get_remedies(&self, condition: &str) -> RemedyResult {
        debug!("Looking up home remedies");

        let condition_lower = condition.to_lowercase();

        // 类目名整体作为子串命中，或其下划线拆分出的词命中
        let mut matched_categories = Vec::new();
        let mut remedies: Vec<&'static str> = Vec::new();
        for (tag, remedy_list) in REMEDIES {
            let name = tag.as_str();
            let matches = condition_lower.contains(name)
                || name.split('_').any(|word| condition_lower.contains(word));
            if matches {
                matched_categories.push(tag);
                remedies.extend_from_slice(remedy_list);
            }
        }

        // 去重，保持首次出现顺序
        let mut unique_remedies: Vec<&'static str> = Vec::with_capacity(remedies.len());
        for remedy in remedies {
            if !unique_remedies.contains(&remedy) {
                unique_remedies.push(remedy);
            }
        }

        if unique_remedies.is_empty() {
            unique_remedies = GENERAL_REMEDY_FALLBACK.to_vec();
            matched_categories = vec![ConditionTag::General];
        }

        let result = RemedyResult {
            condition: condition.to_string(),
            matched_categories,
            remedies: unique_remedies,
            general_tips: GENERAL_TIPS.to_vec(),
            disclaimer: REMEDY_DISCLAIMER,
            warning: REMEDY_WARNING,
        };

        self.log_session("home_remedies", condition, &result);
        result
    }
}

/// 创建响应组装服务
pub fn create_triage_assembler(session_log: Arc<SessionLog>) -> Box<dyn TriageAssembler> {
    Box::new(TriageAssemblerImpl::new(session_log))
}
