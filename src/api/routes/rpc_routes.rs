//! RPC Routes
//!
//! 定义工具调用端点与服务信息端点的路由。

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::{info_handler, rpc_handler};

/// 创建 RPC 路由器
pub fn create_rpc_router() -> Router<AppState> {
    Router::new()
        .route("/mcp", post(rpc_handler::mcp_endpoint))
        .route("/", get(info_handler::root))
        .route("/health", get(info_handler::health_check))
        .route("/tools", get(info_handler::list_tools))
        .route("/logs", get(info_handler::get_logs))
        .route("/metrics", get(info_handler::metrics))
}
