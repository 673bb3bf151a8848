use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端 API 地址
    pub api_base_url: String,
    /// 已有的 JWT 令牌（优先于账号密码）
    pub token: Option<String>,
    /// 登录邮箱
    pub email: Option<String>,
    /// 登录密码
    pub password: Option<String>,
    /// 加载题库的超时时间（秒）
    pub load_timeout_secs: u64,
    /// 默认日志级别（RUST_LOG 未设置时使用）
    pub log_level: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            token: None,
            email: None,
            password: None,
            load_timeout_secs: 30,
            log_level: "info".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 先读 TOML 文件（如果提供），再用环境变量覆盖
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => Self::from_toml_file(p)?.with_env_overrides()?,
            None => Self::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let load_timeout_secs = match env_parse::<u64>("LOAD_TIMEOUT_SECS", "正整数")? {
            Some(0) => {
                return Err(ConfigError::EnvVarParseFailed {
                    var_name: "LOAD_TIMEOUT_SECS".to_string(),
                    value: "0".to_string(),
                    expected_type: "正整数".to_string(),
                })
            }
            Some(secs) => secs,
            None => self.load_timeout_secs,
        };

        Ok(Self {
            api_base_url: std::env::var("AULA_API_URL").unwrap_or(self.api_base_url),
            token: std::env::var("AULA_TOKEN").ok().or(self.token),
            email: std::env::var("AULA_EMAIL").ok().or(self.email),
            password: std::env::var("AULA_PASSWORD").ok().or(self.password),
            load_timeout_secs,
            log_level: std::env::var("LOG_LEVEL").unwrap_or(self.log_level),
            verbose_logging: env_parse::<bool>("VERBOSE_LOGGING", "布尔值 (true/false)")?
                .unwrap_or(self.verbose_logging),
        })
    }

    /// 环境变量已在覆盖时校验，这里只可能是配置文件里的值
    fn validate(&self) -> Result<(), ConfigError> {
        if self.load_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "load_timeout_secs".to_string(),
                value: "0".to_string(),
                reason: "超时时间必须大于 0".to_string(),
            });
        }
        Ok(())
    }
}

/// 读取并解析环境变量；未设置返回 None，解析失败返回错误
fn env_parse<T: FromStr>(var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
