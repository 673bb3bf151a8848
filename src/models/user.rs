use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

use crate::models::role::Role;

/// 当前登录用户信息（`GET /api/users/me`）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_expiration")]
    pub expiration: Expiration,
}

/// 套餐到期时间
///
/// 后端下发 `dd/mm/yyyy` 或者 "Ilimitado" 这类非日期文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiration {
    On(NaiveDate),
    Unlimited(String),
}

impl Default for Expiration {
    fn default() -> Self {
        Expiration::Unlimited(String::new())
    }
}

impl Expiration {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%d/%m/%Y")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .map(Expiration::On)
            .unwrap_or_else(|_| Expiration::Unlimited(raw.to_string()))
    }

    /// 在给定日期是否已过期（到期当天仍可用）
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        match self {
            Expiration::On(date) => *date < today,
            Expiration::Unlimited(_) => false,
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiration::On(date) => write!(f, "{}", date.format("%d/%m/%Y")),
            Expiration::Unlimited(raw) if raw.is_empty() => write!(f, "Indefinido"),
            Expiration::Unlimited(raw) => write!(f, "{}", raw),
        }
    }
}

// 兼容字符串、null 两种写法
fn deserialize_expiration<'de, D>(deserializer: D) -> Result<Expiration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;

    struct ExpirationVisitor;

    impl<'de> Visitor<'de> for ExpirationVisitor {
        type Value = Expiration;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a dd/mm/yyyy date string or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Expiration::parse(value))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Expiration::default())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Expiration::default())
        }
    }

    deserializer.deserialize_any(ExpirationVisitor)
}
