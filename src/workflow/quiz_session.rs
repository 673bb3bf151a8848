//! 答题会话状态机
//!
//! 状态：`InProgress` → `Complete`，答题中每道题又分为 `Unanswered` / `Answered`。
//! `Loading` 由调用方负责，会话只在题库加载成功后才存在。

use crate::error::{LoadError, SessionError};
use crate::models::question::{validate_question_set, AnswerRecord, Question};

/// `select_option` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 记录了本题答案
    Recorded(AnswerRecord),
    /// 本题已作答（或会话已结束），忽略
    Ignored,
}

/// `advance` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 进入下一题
    Next,
    /// 最后一题已完成，会话结束
    Completed,
    /// 当前题尚未作答（或会话已结束），忽略
    Ignored,
}

/// 单次答题会话
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    selected_option_index: Option<usize>,
    history: Vec<AnswerRecord>,
    is_complete: bool,
}

impl QuizSession {
    /// 用已加载的题库创建会话，空题库或无法作答的题目直接拒绝
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        validate_question_set(&questions)?;
        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            selected_option_index: None,
            history: Vec::new(),
            is_complete: false,
        })
    }

    /// 选择当前题的一个选项
    ///
    /// 越界索引返回 `InvalidSelection` 且不修改状态；已作答时为空操作
    pub fn select_option(&mut self, option_index: usize) -> Result<Selection, SessionError> {
        let question = &self.questions[self.current_index];
        if option_index >= question.option_count() {
            return Err(SessionError::InvalidSelection {
                option_index,
                option_count: question.option_count(),
            });
        }
        if self.is_complete || self.is_answered() {
            return Ok(Selection::Ignored);
        }

        let was_correct = question.is_correct(option_index);
        let record = AnswerRecord {
            question_index: self.current_index,
            selected_option_index: option_index,
            was_correct,
        };

        self.selected_option_index = Some(option_index);
        if was_correct {
            self.score += 1;
        }
        self.history.push(record);

        Ok(Selection::Recorded(record))
    }

    /// 进入下一题；最后一题作答后结束会话
    pub fn advance(&mut self) -> Advance {
        if self.is_complete || !self.is_answered() {
            return Advance::Ignored;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_option_index = None;
            Advance::Next
        } else {
            self.is_complete = true;
            Advance::Completed
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 当前题。会话结束后停留在最后一题
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_option_index(&self) -> Option<usize> {
        self.selected_option_index
    }

    pub fn is_answered(&self) -> bool {
        self.selected_option_index.is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question {
            prompt: format!("Pregunta con respuesta {}", correct),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_option_index: correct,
            explanation: None,
        }
    }

    fn session(corrects: &[usize]) -> QuizSession {
        QuizSession::new(corrects.iter().map(|&c| question(c)).collect()).unwrap()
    }

    fn assert_invariants(s: &QuizSession) {
        let correct = s.history().iter().filter(|r| r.was_correct).count();
        assert_eq!(s.score(), correct);
        if s.is_complete() {
            assert_eq!(s.history().len(), s.total());
        } else if s.is_answered() {
            assert_eq!(s.history().len(), s.current_index() + 1);
        } else {
            assert_eq!(s.history().len(), s.current_index());
        }
        assert!(s.current_index() < s.total());
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = QuizSession::new(Vec::new()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyQuestionSet));
    }

    #[test]
    fn test_unanswerable_question_rejected() {
        let no_options = Question {
            options: Vec::new(),
            ..question(0)
        };
        let err = QuizSession::new(vec![question(0), no_options]).unwrap_err();
        assert!(matches!(err, LoadError::InvalidQuestion { index: 1, .. }));

        let bad_answer = Question {
            correct_option_index: 4,
            ..question(0)
        };
        let err = QuizSession::new(vec![bad_answer]).unwrap_err();
        assert!(matches!(err, LoadError::InvalidQuestion { index: 0, .. }));
    }

    #[test]
    fn test_initial_state() {
        let s = session(&[0, 1]);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(!s.is_answered());
        assert!(!s.is_complete());
        assert!(s.history().is_empty());
        assert_invariants(&s);
    }

    #[test]
    fn test_select_correct_option() {
        let mut s = session(&[2, 0]);
        let outcome = s.select_option(2).unwrap();

        assert_eq!(
            outcome,
            Selection::Recorded(AnswerRecord {
                question_index: 0,
                selected_option_index: 2,
                was_correct: true,
            })
        );
        assert_eq!(s.score(), 1);
        assert_eq!(s.selected_option_index(), Some(2));
        assert_invariants(&s);
    }

    #[test]
    fn test_second_selection_ignored() {
        let mut s = session(&[1, 0]);
        s.select_option(0).unwrap();

        assert_eq!(s.select_option(1).unwrap(), Selection::Ignored);
        assert_eq!(s.selected_option_index(), Some(0));
        assert_eq!(s.score(), 0);
        assert_eq!(s.history().len(), 1);
        assert!(!s.history()[0].was_correct);
        assert_invariants(&s);
    }

    #[test]
    fn test_advance_while_unanswered_is_noop() {
        let mut s = session(&[0, 0]);
        assert_eq!(s.advance(), Advance::Ignored);
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_complete());
        assert!(s.history().is_empty());
        assert_invariants(&s);
    }

    #[test]
    fn test_advance_resets_question_state() {
        let mut s = session(&[0, 3]);
        s.select_option(0).unwrap();
        assert_eq!(s.advance(), Advance::Next);

        assert_eq!(s.current_index(), 1);
        assert!(!s.is_answered());
        assert_eq!(s.selected_option_index(), None);
        assert_eq!(s.history().len(), 1);
        assert_invariants(&s);
    }

    #[test]
    fn test_out_of_range_selection_keeps_state() {
        let mut s = session(&[0, 1, 2]);
        let before = s.clone();

        let err = s.select_option(5).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidSelection {
                option_index: 5,
                option_count: 4,
            }
        );
        assert_eq!(s.score(), before.score());
        assert_eq!(s.history(), before.history());
        assert_eq!(s.selected_option_index(), None);
        assert!(!s.is_answered());
    }

    #[test]
    fn test_last_advance_completes_and_freezes() {
        let mut s = session(&[1]);
        s.select_option(1).unwrap();
        assert!(s.is_last_question());
        assert_eq!(s.advance(), Advance::Completed);
        assert!(s.is_complete());

        assert_eq!(s.select_option(0).unwrap(), Selection::Ignored);
        assert_eq!(s.advance(), Advance::Ignored);
        assert_eq!(s.score(), 1);
        assert_eq!(s.history().len(), 1);
        assert_invariants(&s);
    }

    #[test]
    fn test_three_question_run() {
        let mut s = session(&[0, 1, 2]);

        s.select_option(0).unwrap();
        assert_invariants(&s);
        assert_eq!(s.advance(), Advance::Next);
        s.select_option(3).unwrap();
        assert_invariants(&s);
        assert_eq!(s.advance(), Advance::Next);
        s.select_option(2).unwrap();
        assert_invariants(&s);
        assert_eq!(s.advance(), Advance::Completed);

        assert!(s.is_complete());
        assert_eq!(s.score(), 2);
        assert_eq!(s.total(), 3);
        let flags: Vec<bool> = s.history().iter().map(|r| r.was_correct).collect();
        assert_eq!(flags, vec![true, false, true]);
    }
}
