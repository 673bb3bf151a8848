pub mod auth;
pub mod catalog;
pub mod question_loader;

pub use auth::AuthContext;
pub use catalog::TestCatalog;
pub use question_loader::{parse_question_set, QuestionSetLoader, QuestionSource};
