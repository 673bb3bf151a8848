//! 题库加载服务 - 业务能力层
//!
//! 只负责"拿到一套合法的题"，不关心答题流程
//!
//! 支持两种来源：
//! - `http://` / `https://` 远程地址（reqwest）
//! - 本地文件路径或 `file://` 地址（tokio::fs）

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::LoadError;
use crate::models::question::{validate_question_set, Question};

/// 题库来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Remote(String),
    File(PathBuf),
}

impl QuestionSource {
    pub fn parse(locator: &str) -> Self {
        let locator = locator.trim();
        if locator.starts_with("http://") || locator.starts_with("https://") {
            QuestionSource::Remote(locator.to_string())
        } else if let Some(path) = locator.strip_prefix("file://") {
            QuestionSource::File(PathBuf::from(path))
        } else {
            QuestionSource::File(PathBuf::from(locator))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Remote(url) => write!(f, "{}", url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 题库加载服务
///
/// 职责：
/// - 获取题库内容并解析为 `Vec<Question>`
/// - 拒绝空题库和不合法的题目
/// - 不重试，失败由调用方通知用户并关闭播放器
#[derive(Debug, Clone)]
pub struct QuestionSetLoader {
    http: reqwest::Client,
    timeout: Duration,
}

impl QuestionSetLoader {
    /// 创建新的题库加载服务
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(Duration::from_secs(config.load_timeout_secs))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout,
        }
    }

    /// 加载题库
    ///
    /// # 参数
    /// - `source`: 题库来源
    ///
    /// # 返回
    /// 返回至少包含一道合法题目的题库
    pub async fn load(&self, source: &QuestionSource) -> Result<Vec<Question>, LoadError> {
        debug!("加载题库: {}", source);

        let body = match source {
            QuestionSource::Remote(url) => self.fetch_remote(url).await?,
            QuestionSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| LoadError::ReadFailed {
                        path: path.display().to_string(),
                        source,
                    })?
            }
        };

        let questions = parse_question_set(&body)?;
        info!("✓ 题库加载完成，共 {} 道题", questions.len());
        Ok(questions)
    }

    /// 按字符串地址加载
    pub async fn load_from(&self, locator: &str) -> Result<Vec<Question>, LoadError> {
        self.load(&QuestionSource::parse(locator)).await
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let secs = self.timeout.as_secs();

        let request = async {
            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| LoadError::request_failed(url, e, secs))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::BadStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| LoadError::request_failed(url, e, secs))
        };

        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| LoadError::Timeout {
                url: url.to_string(),
                secs,
            })?
    }
}

/// 解析并校验题库 JSON
///
/// 任何一道题不合法，整套题都被拒绝
pub fn parse_question_set(body: &[u8]) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_slice(body)?;
    validate_question_set(&questions)?;
    Ok(questions)
}
