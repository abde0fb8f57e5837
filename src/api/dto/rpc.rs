//! RPC 信封 DTO
//!
//! 定义 `/mcp` 端点的 JSON-RPC 风格请求/响应结构。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RPC 请求信封
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RpcRequest {
    /// 方法名
    pub method: String,
    /// 方法参数
    pub params: Value,
    /// 请求 ID，缺省时由服务端生成
    pub id: Option<Value>,
}

impl Default for RpcRequest {
    fn default() -> Self {
        Self {
            method: String::new(),
            params: Value::Null,
            id: None,
        }
    }
}

/// RPC 协议级错误体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    /// 错误代码（JSON-RPC 惯例的负值代码）
    pub code: i32,
    /// 错误消息
    pub message: String,
}

/// RPC 响应信封
#[derive(Debug, Serialize)]
pub struct RpcResponse {
    /// 请求 ID
    pub id: Value,
    /// 成功结果
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// 协议级错误
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorBody>,
    /// 协议版本
    pub jsonrpc: &'static str,
}

impl RpcResponse {
    /// 创建成功响应
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
            jsonrpc: "2.0",
        }
    }

    /// 创建协议级错误响应
    pub fn protocol_error(id: Value, code: i32, message: &str) -> Self {
        Self {
            id,
            result: None,
            error: Some(RpcErrorBody {
                code,
                message: message.to_string(),
            }),
            jsonrpc: "2.0",
        }
    }
}

/// 请求体无法解析
pub const PARSE_ERROR: i32 = -32700;
/// 缺少方法名
pub const METHOD_REQUIRED: i32 = -32601;
/// 参数类型不符
pub const INVALID_PARAMS: i32 = -32602;
/// 服务端内部错误
pub const INTERNAL_ERROR: i32 = -32603;
