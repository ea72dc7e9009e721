//! Stateful chat with an LLM over pre-fetched context documents.

pub mod core;
pub mod models;
pub mod prompt;

pub use self::core::Chat;
pub use models::{Transcript, Turn};
