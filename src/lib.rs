//! # Aula Test Player
//!
//! 学院"虚拟教室"的在线测试播放器
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 后端 HTTP 调用（登录、用户信息、资料列表）
//!
//! ### ② 业务能力层（Services）
//! - `QuestionSetLoader` - 从远程地址或本地文件加载并校验题库
//! - `AuthContext` - 显式传递的令牌和用户信息
//! - `TestCatalog` - 找出当前用户可以作答的测试
//!
//! ### ③ 流程层（Workflow）
//! - `QuizSession` - 答题状态机（选择 → 下一题 → 完成）
//! - `ResultSummary` - 成绩汇总（0-10 分制，5 分及格）
//!
//! ### ④ 编排层（Orchestration）
//! - `TestPlayer` - 终端播放器：加载 → 作答 → 成绩 → 重做
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::AulaClient;
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, ConfigError, LoadError, SessionError};
pub use models::{AnswerRecord, Question, Role, UserProfile};
pub use orchestrator::{PlayerOutcome, TestPlayer};
pub use services::{AuthContext, QuestionSetLoader, QuestionSource, TestCatalog};
pub use workflow::{Advance, QuizSession, ResultSummary, Selection};
