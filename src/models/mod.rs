pub mod content;
pub mod question;
pub mod role;
pub mod user;

pub use content::{Material, Topic};
pub use question::{validate_question_set, AnswerRecord, Question};
pub use role::Role;
pub use user::{Expiration, UserProfile};
