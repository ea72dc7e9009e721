//! Clients for the OpenAI-compatible chat-completion and embedding APIs.

pub mod core;
pub mod embedding;

pub use self::core::{Message, Role, completion, completion_text};
pub use embedding::{cosine_similarity, embeddings};
