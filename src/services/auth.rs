//! 登录上下文 - 业务能力层
//!
//! 令牌和用户信息显式传递给需要它的地方，不依赖全局存储

use chrono::NaiveDate;
use tracing::info;

use crate::clients::AulaClient;
use crate::config::Config;
use crate::error::{AppResult, ConfigError};
use crate::models::{Role, UserProfile};

/// 已登录用户的上下文
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub token: String,
    pub profile: UserProfile,
}

impl AuthContext {
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }

    /// 账号密码登录，再拉取用户信息
    pub async fn login(client: &AulaClient, email: &str, password: &str) -> AppResult<Self> {
        let auth = client.authenticate(email, password).await?;
        info!("✓ 登录成功: {}", auth.name);
        Self::from_token(client, auth.token).await
    }

    /// 用已有令牌拉取用户信息
    pub async fn from_token(client: &AulaClient, token: impl Into<String>) -> AppResult<Self> {
        let token = token.into();
        let profile = client.fetch_profile(&token).await?;
        info!(
            "👤 当前用户: {} ({})",
            profile.name,
            profile.role.display_name()
        );
        Ok(Self::new(token, profile))
    }

    /// 按配置选择登录方式：令牌优先，其次账号密码
    pub async fn from_config(client: &AulaClient, config: &Config) -> AppResult<Self> {
        if let Some(token) = &config.token {
            return Self::from_token(client, token.clone()).await;
        }
        match (&config.email, &config.password) {
            (Some(email), Some(password)) => Self::login(client, email, password).await,
            _ => Err(ConfigError::MissingCredentials.into()),
        }
    }

    pub fn role(&self) -> &Role {
        &self.profile.role
    }

    /// 当前角色在导航栏中可见的栏目
    pub fn visible_sections(&self) -> Vec<&'static str> {
        let role = self.role();
        let mut sections = Vec::new();
        if role.can_see_syllabus() {
            sections.push("Temario");
        }
        if role.can_see_tests() {
            sections.push("Tests");
        }
        if role.can_see_practical_cases() {
            sections.push("Supuestos Prácticos");
        }
        if role.can_edit_content() {
            sections.push("Gestión de contenidos");
        }
        sections
    }

    /// 套餐在给定日期是否已过期
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        self.profile.expiration.is_expired_at(today)
    }
}
