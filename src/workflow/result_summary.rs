//! 成绩汇总
//!
//! 只读投影：由已结束的会话计算得分、总数和 0-10 分制成绩

use serde::Serialize;

use crate::workflow::quiz_session::QuizSession;

/// 及格线（含）
pub const PASS_MARK: u32 = 5;

/// 满分
pub const MAX_MARK: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub mark: u32,
}

impl ResultSummary {
    /// 会话未结束时返回 None
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        if !session.is_complete() {
            return None;
        }
        Some(Self::new(session.score(), session.total()))
    }

    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            mark: compute_mark(score, total),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.mark >= PASS_MARK
    }
}

/// `round(score / total * 10)`，四舍五入时 .5 远离零（`f64::round`）
///
/// total 为 0 时返回 0；会话层保证不会出现空题库
pub fn compute_mark(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let mark = (score as f64 / total as f64 * MAX_MARK as f64).round();
    (mark as u32).min(MAX_MARK)
}
