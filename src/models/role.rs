//! 用户角色
//!
//! 后端以字符串下发角色，这里收敛为封闭枚举，权限判断只在此处定义一次

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Profesor,
    Completo,
    Premium,
    Test,
    Supuestos,
    Practical,
    Prueba,
    /// 后端新增或未知的角色，保留原始字符串
    Unknown(String),
}

impl Role {
    /// 从后端字符串解析角色，必须与后端的大写名称完全一致
    pub fn parse(s: &str) -> Self {
        match s {
            "ADMIN" => Role::Admin,
            "PROFESOR" => Role::Profesor,
            "COMPLETO" => Role::Completo,
            "PREMIUM" => Role::Premium,
            "TEST" => Role::Test,
            "SUPUESTOS" => Role::Supuestos,
            "PRACTICAL" => Role::Practical,
            "PRUEBA" => Role::Prueba,
            _ => Role::Unknown(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Profesor => "PROFESOR",
            Role::Completo => "COMPLETO",
            Role::Premium => "PREMIUM",
            Role::Test => "TEST",
            Role::Supuestos => "SUPUESTOS",
            Role::Practical => "PRACTICAL",
            Role::Prueba => "PRUEBA",
            Role::Unknown(raw) => raw,
        }
    }

    /// 可以上传和删除资料
    pub fn can_edit_content(&self) -> bool {
        matches!(self, Role::Admin | Role::Profesor)
    }

    /// 可以查看课程资料
    pub fn can_see_syllabus(&self) -> bool {
        !matches!(self, Role::Supuestos)
    }

    /// 可以进入模拟考试
    pub fn can_see_tests(&self) -> bool {
        !matches!(self, Role::Supuestos | Role::Prueba)
    }

    /// 可以查看案例分析
    pub fn can_see_practical_cases(&self) -> bool {
        matches!(self, Role::Admin | Role::Completo | Role::Supuestos)
    }

    /// 个人中心展示的套餐名称
    pub fn display_name(&self) -> &str {
        match self {
            Role::Admin | Role::Profesor => "Cuenta Administrador",
            Role::Premium | Role::Completo => "Opositor Completo",
            Role::Test => "Solo Test",
            Role::Supuestos | Role::Practical => "Solo Supuestos",
            other => other.as_str(),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Unknown(String::new())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Role::parse(&s)).unwrap_or_default())
    }
}
