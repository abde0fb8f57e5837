use crate::config::config::{AppConfig, PlacesConfig, ServerConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. ./config.toml
    /// 2. 环境变量（MEDASSIST_ 前缀）
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MEDASSIST_").split("_").global());

        figment.extract()
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("MEDASSIST_").split("_").global());

        figment.extract()
    }

    /// 加载服务器配置
    pub fn load_server_config() -> Result<ServerConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::development().server))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MEDASSIST_SERVER_").split("_").global());

        figment.extract()
    }

    /// 加载药店搜索配置
    pub fn load_places_config() -> Result<PlacesConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::development().places))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MEDASSIST_PLACES_").split("_").global());

        figment.extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.places.default_radius_km <= 0.0 {
            return Err(ConfigValidationError::InvalidRadius);
        }

        if config.session_log.capacity == 0 {
            return Err(ConfigValidationError::InvalidLogCapacity);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("搜索半径无效，必须大于 0")]
    InvalidRadius,

    #[error("会话日志容量无效，必须大于 0")]
    InvalidLogCapacity,

    #[error("配置路径无效: {0}")]
    InvalidPath(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_config_is_valid() {
        let config = AppConfig::development();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = AppConfig::development();
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = AppConfig::development();
        config.session_log.capacity = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidLogCapacity)
        ));
    }
}
