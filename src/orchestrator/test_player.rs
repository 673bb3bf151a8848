//! 终端测试播放器
//!
//! 加载题库 → 逐题作答 → 显示成绩 → 退出或重做（重做会重新加载整套题）

use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::error::{AppResult, LoadError};
use crate::models::question::Question;
use crate::services::{QuestionSetLoader, QuestionSource};
use crate::utils::logging::{log_question_set_loaded, log_session_result};
use crate::workflow::{Advance, QuizSession, ResultSummary, Selection};

const CLOSE_COMMAND: &str = "q";
const RESTART_COMMAND: &str = "r";

/// 播放器结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// 完成答题后选择退出，带最后一次成绩
    Finished(ResultSummary),
    /// 中途关闭，会话直接丢弃
    Closed,
}

enum Flow {
    Complete,
    Closed,
}

/// 测试播放器
///
/// 输入输出通过泛型注入，便于用脚本化输入测试
pub struct TestPlayer<R, W> {
    loader: QuestionSetLoader,
    source: QuestionSource,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TestPlayer<R, W> {
    pub fn new(loader: QuestionSetLoader, source: QuestionSource, input: R, output: W) -> Self {
        Self {
            loader,
            source,
            input,
            output,
        }
    }

    /// 运行播放器直到退出
    ///
    /// 题库加载失败时提示用户并返回错误，不重试
    pub async fn run(&mut self) -> AppResult<PlayerOutcome> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            writeln!(self.output, "Cargando Test...")?;

            let questions = match self.loader.load(&self.source).await {
                Ok(questions) => questions,
                Err(e) => return Err(self.report_load_error(e)?.into()),
            };
            log_question_set_loaded(&self.source.to_string(), questions.len());

            let mut session = QuizSession::new(questions)?;
            info!("🚀 第 {} 次作答开始", attempt);

            if let Flow::Closed = self.play(&mut session)? {
                info!("播放器已关闭，丢弃当前会话");
                return Ok(PlayerOutcome::Closed);
            }

            let Some(summary) = ResultSummary::from_session(&session) else {
                return Ok(PlayerOutcome::Closed);
            };
            log_session_result(&summary);
            self.render_summary(&summary)?;

            match self.read_command()?.as_deref() {
                Some(RESTART_COMMAND) => {
                    debug!("重新加载题库: {}", self.source);
                    continue;
                }
                _ => return Ok(PlayerOutcome::Finished(summary)),
            }
        }
    }

    fn report_load_error(&mut self, e: LoadError) -> std::io::Result<LoadError> {
        error!("❌ 加载题库失败: {}", e);
        writeln!(self.output, "Error al cargar el archivo del test.")?;
        Ok(e)
    }

    fn play(&mut self, session: &mut QuizSession) -> AppResult<Flow> {
        while !session.is_complete() {
            self.render_question(session)?;

            // 未作答前不能进入下一题
            while !session.is_answered() {
                let Some(line) = self.read_command()? else {
                    return Ok(Flow::Closed);
                };
                if line == CLOSE_COMMAND {
                    return Ok(Flow::Closed);
                }

                let Some(option_index) = parse_option(&line) else {
                    writeln!(self.output, "Escribe el número de una opción.")?;
                    continue;
                };

                match session.select_option(option_index) {
                    Ok(Selection::Recorded(record)) => {
                        debug!(
                            "第 {} 题选择 {}，{}",
                            record.question_index + 1,
                            record.selected_option_index + 1,
                            if record.was_correct { "正确" } else { "错误" }
                        );
                        self.render_feedback(session)?;
                    }
                    Ok(Selection::Ignored) => {}
                    Err(e) => {
                        debug!("{}", e);
                        writeln!(self.output, "Opción no válida.")?;
                    }
                }
            }

            let label = if session.is_last_question() {
                "Finalizar"
            } else {
                "Siguiente"
            };
            writeln!(self.output, "[Enter] {}  [q] Salir", label)?;

            match self.read_command()?.as_deref() {
                None | Some(CLOSE_COMMAND) => return Ok(Flow::Closed),
                Some(_) => {}
            }
            if let Advance::Completed = session.advance() {
                debug!("最后一题完成");
            }
        }
        Ok(Flow::Complete)
    }

    fn render_question(&mut self, session: &QuizSession) -> std::io::Result<()> {
        let question = session.current_question();
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Pregunta {}/{}",
            session.current_index() + 1,
            session.total()
        )?;
        writeln!(self.output, "{}", question.prompt)?;
        for (idx, option) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, option)?;
        }
        Ok(())
    }

    fn render_feedback(&mut self, session: &QuizSession) -> std::io::Result<()> {
        let question: &Question = session.current_question();
        let selected = session.selected_option_index();

        for (idx, option) in question.options.iter().enumerate() {
            let mark = if question.is_correct(idx) {
                "✔"
            } else if Some(idx) == selected {
                "✘"
            } else {
                " "
            };
            writeln!(self.output, "{} {}. {}", mark, idx + 1, option)?;
        }

        if let Some(explanation) = &question.explanation {
            writeln!(self.output, "ℹ {}", explanation)?;
        }
        Ok(())
    }

    fn render_summary(&mut self, summary: &ResultSummary) -> std::io::Result<()> {
        writeln!(self.output)?;
        let verdict = if summary.is_pass() { "✔ APTO" } else { "✘ NO APTO" };
        writeln!(self.output, "{}", verdict)?;
        writeln!(self.output, "Has sacado un {}", summary.mark)?;
        writeln!(
            self.output,
            "Aciertos: {} de {}",
            summary.score, summary.total
        )?;
        writeln!(self.output, "[s] Salir  [r] Repetir")?;
        Ok(())
    }

    /// 读取一行命令，输入结束时返回 None
    fn read_command(&mut self) -> std::io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}

/// 用户输入的选项从 1 开始编号
fn parse_option(line: &str) -> Option<usize> {
    line.parse::<usize>().ok()?.checked_sub(1)
}
