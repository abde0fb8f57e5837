//! MedAssist - 基于关键词规则的医疗分诊指引服务
//!
//! 对自由文本症状描述做分类与分诊，返回非处方药建议、家庭疗法与
//! 警示信号，并通过 RPC 风格端点对外暴露工具能力。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
