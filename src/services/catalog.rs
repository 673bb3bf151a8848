//! 模拟考试目录 - 业务能力层
//!
//! 从资料列表中找出"综合测试/模拟考试"分类下的测试

use tracing::{info, warn};

use crate::clients::AulaClient;
use crate::error::{ApiError, AppResult};
use crate::models::{Material, Topic};
use crate::services::auth::AuthContext;

/// 可用测试列表
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    tests: Vec<Material>,
}

impl TestCatalog {
    /// 拉取当前用户可见的测试
    pub async fn fetch(client: &AulaClient, auth: &AuthContext) -> AppResult<Self> {
        if !auth.role().can_see_tests() {
            return Err(ApiError::forbidden(auth.role().as_str(), "模拟考试").into());
        }

        let topics = client.fetch_contents(&auth.token).await?;
        let catalog = Self::from_topics(&topics);
        info!(
            "📋 找到 {} 个测试，其中 {} 个可在线作答",
            catalog.tests.len(),
            catalog.interactive().count()
        );
        Ok(catalog)
    }

    /// 取第一个综合测试分类下的 TEST 资料
    pub fn from_topics(topics: &[Topic]) -> Self {
        let Some(topic) = topics.iter().find(|t| t.is_general_tests()) else {
            warn!("⚠️ 没有找到综合测试分类");
            return Self::default();
        };

        Self {
            tests: topic
                .materials
                .iter()
                .filter(|m| m.is_test())
                .cloned()
                .collect(),
        }
    }

    pub fn all(&self) -> &[Material] {
        &self.tests
    }

    /// 可直接作答的测试（JSON 题库）
    pub fn interactive(&self) -> impl Iterator<Item = &Material> {
        self.tests.iter().filter(|m| m.is_interactive())
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
