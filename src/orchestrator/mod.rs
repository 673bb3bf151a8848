//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! test_player (加载 → 作答 → 成绩 → 重做)
//!     ↓
//! workflow::QuizSession / ResultSummary (纯状态机)
//!     ↓
//! services (能力层：题库加载 / 登录 / 测试目录)
//!     ↓
//! clients (后端 HTTP 调用)
//! ```

pub mod test_player;

pub use test_player::{PlayerOutcome, TestPlayer};
