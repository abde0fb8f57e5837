use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;
use uuid::Uuid;

use crate::{
    api::{
        app_state::AppState,
        dto::rpc::{INVALID_PARAMS, METHOD_REQUIRED, PARSE_ERROR, RpcRequest, RpcResponse},
        dto::tools::*,
    },
    error::{AppError, Result},
    models::triage::TriageLevel,
    services::places::ChemistResult,
};

/// 主 RPC 端点：解析信封、分发方法、回包
pub async fn mcp_endpoint(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RpcRequest>, JsonRejection>,
) -> Json<RpcResponse> {
    state.metrics.record_http_request();

    let Ok(Json(request)) = payload else {
        state.metrics.record_error();
        return Json(RpcResponse::protocol_error(
            Value::Null,
            PARSE_ERROR,
            "Parse error",
        ));
    };

    let request_id = request
        .id
        .unwrap_or_else(|| json!(format!("req_{}", Uuid::new_v4())));

    if request.method.is_empty() {
        state.metrics.record_error();
        return Json(RpcResponse::protocol_error(
            request_id,
            METHOD_REQUIRED,
            "Method required",
        ));
    }

    debug!("Dispatching tool call: {}", request.method);
    state.metrics.record_tool_call();

    match dispatch(&state, &request.method, request.params).await {
        Ok(result) => Json(RpcResponse::success(request_id, result)),
        Err(AppError::Validation(message)) => {
            state.metrics.record_error();
            Json(RpcResponse::protocol_error(
                request_id,
                INVALID_PARAMS,
                &message,
            ))
        }
        Err(e) => {
            state.metrics.record_error();
            Json(RpcResponse::protocol_error(
                request_id,
                crate::api::dto::rpc::INTERNAL_ERROR,
                &e.to_string(),
            ))
        }
    }
}

/// 将方法名路由到对应的工具实现
///
/// 未知方法返回结果形态的错误对象，不算协议级故障。
async fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value> {
    match method {
        "analyze_symptoms" => {
            let params: AnalyzeSymptomsParams = parse_params(params)?;
            let result = state.assembler.analyze_symptoms(&params.symptoms, &params.age);
            if result.triage_level() == TriageLevel::Emergency {
                state.metrics.record_emergency_detection();
            }
            Ok(serde_json::to_value(result)?)
        }
        "suggest_medicine" => {
            let params: SuggestMedicineParams = parse_params(params)?;
            let result = state.assembler.suggest_medicine(&params.condition, &params.age);
            Ok(serde_json::to_value(result)?)
        }
        "get_remedies" => {
            let params: GetRemediesParams = parse_params(params)?;
            let result = state.assembler.get_remedies(&params.condition);
            Ok(serde_json::to_value(result)?)
        }
        "find_chemists" => {
            let params: FindChemistsParams = parse_params(params)?;
            let radius_km = params
                .radius_km
                .unwrap_or(state.config.places.default_radius_km);

            let result = state.chemist_finder.find(&params.location, radius_km).await;
            if matches!(result, ChemistResult::Fallback(_)) {
                state.metrics.record_chemist_lookup_failure();
            }

            let output = serde_json::to_value(result)?;
            state.session_log.append(crate::models::session::SessionRecord::new(
                "chemist_search",
                &params.location,
                output.clone(),
            ));
            Ok(output)
        }
        "get_session_logs" => {
            let params: GetSessionLogsParams = parse_params(params)?;
            let limit = params
                .limit
                .unwrap_or(state.config.session_log.default_limit);

            let result = SessionLogsResult {
                total_sessions: state.session_log.total(),
                recent_sessions: state.session_log.recent(limit),
                server_uptime: "Running",
            };
            Ok(serde_json::to_value(result)?)
        }
        "list_tools" => Ok(tool_list()),
        _ => Ok(json!({"error": format!("Unknown method: {}", method)})),
    }
}

/// 解析方法参数，缺省 params 视为空对象
fn parse_params<P: DeserializeOwned + Default>(params: Value) -> Result<P> {
    if params.is_null() {
        return Ok(P::default());
    }
    serde_json::from_value(params).map_err(|e| AppError::Validation(e.to_string()))
}
