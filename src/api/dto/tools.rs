//! 工具参数与能力描述 DTO
//!
//! 每个方法对应一个类型化的参数结构，在边界处校验后才进入核心逻辑。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::models::session::SessionRecord;

fn default_age() -> String {
    "adult".to_string()
}

/// analyze_symptoms 参数
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalyzeSymptomsParams {
    /// 症状描述
    pub symptoms: String,
    /// 年龄组（child/adult/elderly）
    pub age: String,
    /// 所在位置（用于急救服务提示）
    pub location: Option<String>,
}

impl Default for AnalyzeSymptomsParams {
    fn default() -> Self {
        Self {
            symptoms: String::new(),
            age: default_age(),
            location: None,
        }
    }
}

/// suggest_medicine 参数
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SuggestMedicineParams {
    /// 病情描述
    pub condition: String,
    /// 年龄组
    pub age: String,
}

impl Default for SuggestMedicineParams {
    fn default() -> Self {
        Self {
            condition: String::new(),
            age: default_age(),
        }
    }
}

/// get_remedies 参数
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct GetRemediesParams {
    /// 病情描述
    pub condition: String,
}

/// find_chemists 参数
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FindChemistsParams {
    /// 搜索位置
    pub location: String,
    /// 搜索半径（公里），缺省用配置默认值
    pub radius_km: Option<f64>,
}

/// get_session_logs 参数
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct GetSessionLogsParams {
    /// 返回条数，缺省用配置默认值
    pub limit: Option<usize>,
}

/// get_session_logs 结果
#[derive(Debug, Serialize)]
pub struct SessionLogsResult {
    /// 当前保留的记录总数
    pub total_sessions: usize,
    /// 最近的记录（时间升序）
    pub recent_sessions: Vec<SessionRecord>,
    /// 服务运行状态
    pub server_uptime: &'static str,
}

/// 工具能力描述符，版本无关的静态结构
static TOOL_DESCRIPTORS: Lazy<Value> = Lazy::new(|| {
    json!({
        "tools": [
            {
                "name": "analyze_symptoms",
                "description": "Analyze symptoms and provide triage recommendations",
                "parameters": {
                    "symptoms": "string (required) - Description of symptoms",
                    "age": "string (optional) - Patient age group (child/adult/elderly)",
                    "location": "string (optional) - Location for emergency services"
                }
            },
            {
                "name": "suggest_medicine",
                "description": "Suggest safe over-the-counter medicines",
                "parameters": {
                    "condition": "string (required) - Medical condition or symptoms",
                    "age": "string (optional) - Patient age group"
                }
            },
            {
                "name": "get_remedies",
                "description": "Get home remedies for common conditions",
                "parameters": {
                    "condition": "string (required) - Medical condition"
                }
            },
            {
                "name": "find_chemists",
                "description": "Find nearby pharmacies/chemists",
                "parameters": {
                    "location": "string (required) - Location to search near",
                    "radius_km": "float (optional) - Search radius in kilometers (default: 5.0)"
                }
            },
            {
                "name": "get_session_logs",
                "description": "Get recent consultation logs",
                "parameters": {
                    "limit": "int (optional) - Number of recent sessions (default: 10)"
                }
            }
        ]
    })
});

/// list_tools 的静态能力描述
pub fn tool_list() -> Value {
    TOOL_DESCRIPTORS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_list_is_stable() {
        let tools = tool_list();
        let names: Vec<&str> = tools["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "analyze_symptoms",
                "suggest_medicine",
                "get_remedies",
                "find_chemists",
                "get_session_logs",
            ]
        );
        assert_eq!(tool_list(), tools);
    }

    #[test]
    fn test_params_default_age_is_adult() {
        let params: AnalyzeSymptomsParams =
            serde_json::from_value(json!({"symptoms": "fever"})).unwrap();
        assert_eq!(params.age, "adult");
    }
}
