//! API 数据传输对象

pub mod rpc;
pub mod tools;
