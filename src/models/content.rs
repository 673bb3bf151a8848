use serde::{Deserialize, Serialize};

/// 资料分类（`GET /api/contents`）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// 分类下的单个资料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub material_type: String,
}

impl Topic {
    /// 是否为"综合测试/模拟考试"分类
    pub fn is_general_tests(&self) -> bool {
        let title = self.title.to_uppercase();
        title.contains("TESTS GENERALES") || title.contains("SIMULACROS")
    }
}

impl Material {
    pub fn is_test(&self) -> bool {
        self.material_type == "TEST"
    }

    /// JSON 题库可以直接在播放器里作答，其余（PDF）只能下载
    pub fn is_interactive(&self) -> bool {
        self.url
            .as_deref()
            .map(|u| u.to_lowercase().ends_with(".json"))
            .unwrap_or(false)
    }
}
