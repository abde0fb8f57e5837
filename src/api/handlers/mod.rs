//! API 处理器模块

pub mod info_handler;
pub mod rpc_handler;
