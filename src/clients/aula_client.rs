/// 学院后端 API 客户端
///
/// 封装登录、用户信息、资料列表三个接口
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{Topic, UserProfile};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const AUTHENTICATE_PATH: &str = "/api/auth/authenticate";
const PROFILE_PATH: &str = "/api/users/me";
const CONTENTS_PATH: &str = "/api/contents";

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// 登录接口返回
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub name: String,
}

/// 学院后端 API 客户端
#[derive(Debug, Clone)]
pub struct AulaClient {
    http: reqwest::Client,
    base_url: String,
}

impl AulaClient {
    /// 创建新的后端客户端
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.load_timeout_secs))
            .build()
            .map_err(|e| ApiError::request_failed(&config.api_base_url, e))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 把资料里的相对地址补全为绝对地址
    pub fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.base_url, url.trim_start_matches('/'))
        }
    }

    /// 账号密码登录
    ///
    /// # 返回
    /// 返回 JWT 令牌和用户名
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = self.endpoint(AUTHENTICATE_PATH);
        debug!("登录: {}", email);

        let response = self
            .http
            .post(&url)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(AUTHENTICATE_PATH, e))?;

        match response.status() {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ApiError::Unauthorized {
                    endpoint: AUTHENTICATE_PATH.to_string(),
                })
            }
            s => {
                return Err(ApiError::BadResponse {
                    endpoint: AUTHENTICATE_PATH.to_string(),
                    status: s.as_u16(),
                })
            }
        }

        response
            .json::<AuthResponse>()
            .await
            .map_err(|source| ApiError::DecodeFailed {
                endpoint: AUTHENTICATE_PATH.to_string(),
                source,
            })
    }

    /// 获取当前用户信息，任何非 2xx 都视为令牌无效
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .http
            .get(self.endpoint(PROFILE_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(PROFILE_PATH, e))?;

        if !response.status().is_success() {
            debug!("用户信息返回 {}", response.status());
            return Err(ApiError::Unauthorized {
                endpoint: PROFILE_PATH.to_string(),
            });
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|source| ApiError::DecodeFailed {
                endpoint: PROFILE_PATH.to_string(),
                source,
            })
    }

    /// 获取全部资料分类，非 2xx 时按空列表处理
    pub async fn fetch_contents(&self, token: &str) -> Result<Vec<Topic>, ApiError> {
        let response = self
            .http
            .get(self.endpoint(CONTENTS_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(CONTENTS_PATH, e))?;

        if !response.status().is_success() {
            warn!("⚠️ 资料列表返回 {}，按空列表处理", response.status());
            return Ok(Vec::new());
        }

        response
            .json::<Vec<Topic>>()
            .await
            .map_err(|source| ApiError::DecodeFailed {
                endpoint: CONTENTS_PATH.to_string(),
                source,
            })
    }
}
