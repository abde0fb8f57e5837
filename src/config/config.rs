use serde::{Deserialize, Serialize};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
    /// 最大请求体大小（字节）
    pub max_request_size: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 药店搜索配置（Google Places）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlacesConfig {
    /// Google Places API 密钥（为空时走手动搜索降级路径）
    pub api_key: String,
    /// Places API 基础地址（测试时可指向 mock 服务器）
    pub base_url: String,
    /// 默认搜索半径（公里）
    pub default_radius_km: f64,
    /// 返回结果上限
    pub max_results: usize,
    /// 请求超时（秒）
    pub request_timeout: u64,
}

/// 会话日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionLogConfig {
    /// 保留的会话记录上限
    pub capacity: usize,
    /// 默认查询条数
    pub default_limit: usize,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 药店搜索配置
    pub places: PlacesConfig,
    /// 会话日志配置
    pub session_log: SessionLogConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8000,
                request_timeout: 30,
                max_request_size: 1024 * 1024,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
            places: PlacesConfig {
                api_key: String::new(),
                base_url: "https://maps.googleapis.com/maps/api/place".into(),
                default_radius_km: 5.0,
                max_results: 5,
                request_timeout: 10,
            },
            session_log: SessionLogConfig {
                capacity: 100,
                default_limit: 10,
            },
            app_name: "medassist".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config
    }
}
