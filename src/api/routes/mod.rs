//! API 路由模块

pub mod rpc_routes;
