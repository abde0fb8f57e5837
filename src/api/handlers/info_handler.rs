use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::api::{app_state::AppState, dto::tools};

/// 服务信息
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.record_http_request();

    Json(json!({
        "name": "MedAssist Medical Triage Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "description": "Simple medical guidance through an RPC-style tool endpoint",
        "endpoints": {
            "health": "/health",
            "mcp": "/mcp (POST)",
            "tools": "/tools",
            "logs": "/logs",
            "metrics": "/metrics"
        },
        "available_tools": [
            "analyze_symptoms",
            "suggest_medicine",
            "get_remedies",
            "find_chemists",
            "get_session_logs"
        ]
    }))
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.record_http_request();

    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "rpc_endpoint": "active",
            "medical_tools": "active",
            "session_logging": "active"
        }
    }))
}

/// 工具能力描述
pub async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.record_http_request();
    Json(tools::tool_list())
}

#[derive(Debug, Deserialize, Default)]
pub struct LogsParams {
    pub limit: Option<usize>,
}

/// 最近的会话日志
pub async fn get_logs(
    State(state): State<AppState>,
    Query(params): Query<LogsParams>,
) -> impl IntoResponse {
    state.metrics.record_http_request();

    let limit = params
        .limit
        .unwrap_or(state.config.session_log.default_limit);
    debug!("Fetching session logs: limit={}", limit);

    Json(json!({
        "total_sessions": state.session_log.total(),
        "recent_sessions": state.session_log.recent(limit),
        "server_uptime": "Running"
    }))
}

/// Prometheus 指标
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.gather()
}
