//! 静态医疗知识表
//!
//! 药品、家庭疗法、警示信号与红旗关键词的硬编码数据。
//! 所有匹配均为小写子串包含，表序即匹配序。

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::condition::ConditionTag;
use crate::models::medicine::MedicineRecord;

/// 红旗（急诊）关键词，任何命中都会短路为 Emergency 分诊
pub const EMERGENCY_KEYWORDS: [&str; 20] = [
    "chest pain",
    "difficulty breathing",
    "unconscious",
    "severe bleeding",
    "stroke",
    "heart attack",
    "poisoning",
    "severe headache",
    "high fever above 103",
    "seizure",
    "suicide",
    "self harm",
    "overdose",
    "choking",
    "severe abdominal pain",
    "severe vomiting",
    "blood in vomit",
    "blood in stool",
    "severe diarrhea",
    "dehydration signs",
];

/// 程度加重词，命中即 Urgent
pub const SEVERITY_KEYWORDS: [&str; 4] = ["severe", "extreme", "unbearable", "intense"];

/// 持续性/高值词，命中即 Routine
pub const PERSISTENCE_KEYWORDS: [&str; 4] = ["high fever", "103", "persistent", "worsening"];

/// 非处方药数据库，仅覆盖 fever/headache/pain/cold
pub static MEDICINES: Lazy<HashMap<ConditionTag, MedicineRecord>> = Lazy::new(|| {
    HashMap::from([
        (
            ConditionTag::Fever,
            MedicineRecord {
                medicine: "Paracetamol",
                dose: "500mg every 6-8 hours",
                max_daily: Some("4g (4000mg)"),
                frequency: None,
                additional: None,
                warning: "Don't exceed maximum daily dose",
                age_restriction: Some("Not for children under 3 months"),
            },
        ),
        (
            ConditionTag::Headache,
            MedicineRecord {
                medicine: "Paracetamol or Ibuprofen",
                dose: "Paracetamol: 500mg OR Ibuprofen: 200-400mg",
                max_daily: None,
                frequency: Some("every 6-8 hours"),
                additional: None,
                warning: "Don't take both together",
                age_restriction: Some("Ibuprofen not for children under 6 months"),
            },
        ),
        (
            ConditionTag::Pain,
            MedicineRecord {
                medicine: "Ibuprofen",
                dose: "200-400mg every 6-8 hours",
                max_daily: Some("1200mg"),
                frequency: None,
                additional: None,
                warning: "Take with food to avoid stomach upset",
                age_restriction: Some("Not for children under 6 months"),
            },
        ),
        (
            ConditionTag::Cold,
            MedicineRecord {
                medicine: "Paracetamol for fever/pain",
                dose: "500mg every 6-8 hours",
                max_daily: None,
                frequency: None,
                additional: Some("ORS for hydration if needed"),
                warning: "No antibiotics for viral cold",
                age_restriction: None,
            },
        ),
    ])
});

/// 按病情标签查询药品建议
pub fn medicine_for(tag: ConditionTag) -> Option<&'static MedicineRecord> {
    MEDICINES.get(&tag)
}

/// 家庭疗法表，有序：get_remedies 的多类目匹配按此顺序拼接
pub const REMEDIES: [(ConditionTag, &[&str]); 5] = [
    (
        ConditionTag::Fever,
        &[
            "Rest and drink plenty of fluids (water, fruit juices)",
            "Cool compress on forehead and wrists",
            "Light, loose cotton clothing",
            "Room temperature bath or sponging",
            "Avoid heavy meals, eat light foods",
        ],
    ),
    (
        ConditionTag::Cough,
        &[
            "Honey and warm water (1 tsp honey in warm water)",
            "Steam inhalation (hot water bowl with towel over head)",
            "Gargle with warm salt water (1/2 tsp salt in warm water)",
            "Stay hydrated with warm fluids",
            "Elevate head while sleeping",
        ],
    ),
    (
        ConditionTag::Headache,
        &[
            "Rest in dark, quiet room",
            "Cold compress on forehead or warm compress on neck",
            "Stay hydrated - drink water",
            "Gentle neck and shoulder massage",
            "Avoid loud noises and bright lights",
        ],
    ),
    (
        ConditionTag::Cold,
        &[
            "Rest and get adequate sleep",
            "Warm fluids (herbal tea, warm water with honey)",
            "Saline nasal rinse or drops",
            "Humidifier or steam inhalation",
            "Throat lozenges for sore throat",
        ],
    ),
    (
        ConditionTag::StomachUpset,
        &[
            "BRAT diet (Bananas, Rice, Applesauce, Toast)",
            "Stay hydrated with ORS or clear fluids",
            "Ginger tea for nausea",
            "Avoid dairy, fatty, or spicy foods",
            "Rest and avoid stress",
        ],
    ),
];

/// 按病情标签查询家庭疗法
pub fn remedies_for(tag: ConditionTag) -> Option<&'static [&'static str]> {
    REMEDIES
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, list)| *list)
}

/// analyze_symptoms 在疗法表未命中时的兜底建议
pub const GENERIC_REMEDIES: [&str; 3] = ["Rest", "Stay hydrated", "Monitor symptoms"];

/// get_remedies 在疗法表未命中时的兜底建议
pub const GENERAL_REMEDY_FALLBACK: [&str; 3] = [
    "Rest and stay hydrated with plenty of fluids",
    "Monitor your symptoms carefully",
    "Seek medical advice if symptoms worsen or persist",
];

/// 家庭疗法通用提示
pub const GENERAL_TIPS: [&str; 3] = [
    "Home remedies work best alongside proper rest",
    "Stay hydrated throughout treatment",
    "If symptoms worsen, seek medical help",
];

/// 按病情标签查询警示信号，未覆盖的标签回退到 general 条目
pub fn warning_signs_for(tag: ConditionTag) -> &'static [&'static str] {
    match tag {
        ConditionTag::Fever => &[
            "Temperature above 103°F (39.4°C)",
            "Persistent fever beyond 3 days",
            "Difficulty breathing",
        ],
        ConditionTag::Headache => &[
            "Sudden severe headache",
            "Headache with neck stiffness",
            "Changes in vision",
        ],
        ConditionTag::Cough => &["Blood in cough", "Difficulty breathing", "Chest pain"],
        ConditionTag::Cold => &["High fever", "Severe throat pain", "Ear pain"],
        _ => &[
            "Worsening symptoms",
            "New severe symptoms",
            "Signs of dehydration",
        ],
    }
}

/// 常见连锁药店，药店搜索降级路径返回
pub const COMMON_PHARMACY_CHAINS: [&str; 5] = [
    "Apollo Pharmacy",
    "MedPlus",
    "Netmeds",
    "1mg",
    "Guardian Pharmacy",
];

/// 通用免责声明（非急诊路径）
pub const STANDARD_DISCLAIMER: &str =
    "⚠️ This is informational only. Consult a healthcare professional for medical advice.";

/// 急诊免责声明
pub const EMERGENCY_DISCLAIMER: &str =
    "This is a medical emergency. Get professional medical help immediately.";

/// 药品建议免责声明
pub const MEDICINE_DISCLAIMER: &str =
    "⚠️ Only use as directed. Consult pharmacist if unsure. Not for prescription medicines.";

/// 家庭疗法免责声明
pub const REMEDY_DISCLAIMER: &str =
    "🏠 Home remedies are supportive care only. Not a substitute for professional medical advice";

/// 家庭疗法警告
pub const REMEDY_WARNING: &str = "⚠️ Seek medical help if symptoms are severe or worsen";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medicine_table_covers_four_tags() {
        assert_eq!(MEDICINES.len(), 4);
        assert!(medicine_for(ConditionTag::Fever).is_some());
        assert!(medicine_for(ConditionTag::Cough).is_none());
        assert!(medicine_for(ConditionTag::General).is_none());
    }

    #[test]
    fn test_fever_medicine_is_paracetamol() {
        let record = medicine_for(ConditionTag::Fever).unwrap();
        assert_eq!(record.medicine, "Paracetamol");
        assert_eq!(record.dose, "500mg every 6-8 hours");
    }

    #[test]
    fn test_remedy_table_order() {
        let tags: Vec<ConditionTag> = REMEDIES.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(
            tags,
            vec![
                ConditionTag::Fever,
                ConditionTag::Cough,
                ConditionTag::Headache,
                ConditionTag::Cold,
                ConditionTag::StomachUpset,
            ]
        );
    }

    #[test]
    fn test_warning_signs_fallback_to_general() {
        assert_eq!(
            warning_signs_for(ConditionTag::StomachUpset),
            warning_signs_for(ConditionTag::General)
        );
    }
}
