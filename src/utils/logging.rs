//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use chrono::NaiveDate;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::AuthContext;
use crate::workflow::ResultSummary;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则使用给定的默认级别；重复调用无副作用
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 测试播放器");
    info!("🌐 后端地址: {}", config.api_base_url);
    info!("⏱️ 加载超时: {} 秒", config.load_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 记录登录用户的套餐、到期时间和可见栏目
pub fn log_profile(auth: &AuthContext, today: NaiveDate) {
    info!("📦 套餐: {}", auth.role().display_name());
    info!("📅 到期: {}", auth.profile.expiration);
    if auth.is_expired_at(today) {
        warn!("⚠️ 套餐已过期");
    }
    info!("🧭 可见栏目: {}", auth.visible_sections().join(", "));
}

/// 记录题库加载信息
///
/// # 参数
/// - `source`: 题库来源
/// - `total`: 题目总数
pub fn log_question_set_loaded(source: &str, total: usize) {
    info!("✓ 题库 {} 已加载", truncate_text(source, 80));
    info!("📋 共 {} 道题", total);
}

/// 记录一次作答的成绩
pub fn log_session_result(summary: &ResultSummary) {
    info!("\n{}", "─".repeat(60));
    info!(
        "📊 作答完成: 答对 {}/{}，成绩 {}",
        summary.score, summary.total, summary.mark
    );
    if summary.is_pass() {
        info!("✅ 及格");
    } else {
        info!("❌ 不及格");
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
