pub mod quiz_session;
pub mod result_summary;

pub use quiz_session::{Advance, QuizSession, Selection};
pub use result_summary::{compute_mark, ResultSummary};
