use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// 单道选择题
///
/// 字段名与现有题库 JSON 文件保持一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_option_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_option_index
    }

    /// 正确选项文本
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_option_index).map(String::as_str)
    }
}

/// 校验整套题：不能为空，每道题至少一个选项且正确答案在选项范围内
///
/// 任何一道题不合法，整套题都被拒绝
pub fn validate_question_set(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::EmptyQuestionSet);
    }

    for (index, question) in questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(LoadError::invalid_question(index, "没有选项"));
        }
        if question.correct_option().is_none() {
            return Err(LoadError::invalid_question(
                index,
                format!(
                    "正确答案 {} 超出选项范围 [0, {})",
                    question.correct_option_index,
                    question.option_count()
                ),
            ));
        }
    }

    Ok(())
}

/// 一次作答记录，写入后不再修改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected_option_index: usize,
    pub was_correct: bool,
}
