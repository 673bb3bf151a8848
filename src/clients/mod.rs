pub mod aula_client;

pub use aula_client::{AuthResponse, AulaClient};
