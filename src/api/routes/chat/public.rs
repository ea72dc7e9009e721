//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::Turn;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub turns: Vec<Turn>,
}
