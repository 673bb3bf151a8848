use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库加载错误
    #[error("加载错误: {0}")]
    Load(#[from] LoadError),
    /// 答题会话错误
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
    /// 后端 API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 终端读写错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 题库加载错误
///
/// 任何一种都意味着整套题被拒绝，播放器不会进入答题状态
#[derive(Debug, Error)]
pub enum LoadError {
    /// 网络请求失败
    #[error("请求题库失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务器返回非 2xx 状态
    #[error("题库返回错误状态 ({url}): {status}")]
    BadStatus { url: String, status: u16 },
    /// 请求超时
    #[error("请求题库超时 ({url}), 已等待 {secs} 秒")]
    Timeout { url: String, secs: u64 },
    /// 读取本地文件失败
    #[error("读取题库文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("题库JSON解析失败: {0}")]
    ParseFailed(#[from] serde_json::Error),
    /// 题库为空
    #[error("题库为空，至少需要一道题")]
    EmptyQuestionSet,
    /// 单道题数据不合法
    #[error("第 {index} 题数据不合法: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// 答题会话错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// 选项索引超出范围
    #[error("选项 {option_index} 超出范围 [0, {option_count})")]
    InvalidSelection {
        option_index: usize,
        option_count: usize,
    },
}

/// 后端 API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回错误响应
    #[error("API返回错误响应 ({endpoint}): status={status}")]
    BadResponse { endpoint: String, status: u16 },
    /// 凭据无效或令牌过期
    #[error("未授权 ({endpoint})")]
    Unauthorized { endpoint: String },
    /// 当前角色无权访问
    #[error("角色 {role} 无权访问: {what}")]
    Forbidden { role: String, what: String },
    /// 响应体解析失败
    #[error("API响应解析失败 ({endpoint}): {source}")]
    DecodeFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 既没有令牌也没有账号密码
    #[error("缺少登录凭据: 请设置 AULA_TOKEN 或 AULA_EMAIL/AULA_PASSWORD")]
    MissingCredentials,
    /// 配置文件中的值不合法
    #[error("配置项 {field} 的值 '{value}' 不合法: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl LoadError {
    /// 创建请求失败错误，超时单独归类
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error, secs: u64) -> Self {
        let url = url.into();
        if source.is_timeout() {
            LoadError::Timeout { url, secs }
        } else {
            LoadError::RequestFailed { url, source }
        }
    }

    /// 创建单题校验错误
    pub fn invalid_question(index: usize, reason: impl Into<String>) -> Self {
        LoadError::InvalidQuestion {
            index,
            reason: reason.into(),
        }
    }
}

impl ApiError {
    /// 创建API请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建角色无权访问错误
    pub fn forbidden(role: impl Into<String>, what: impl Into<String>) -> Self {
        ApiError::Forbidden {
            role: role.into(),
            what: what.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
