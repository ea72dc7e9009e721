//! Test utilities for integration tests
use std::sync::Arc;

use axum::Router;
use axum::body::Body;

use intake::api::{AppState, app};
use intake::context::ContextMode;
use intake::core::AppConfig;

/// A configuration with nothing external reachable: SMTP unset, no
/// context sources, and an LLM host pointing at a closed port. Tests
/// override fields as needed.
pub fn test_config() -> AppConfig {
    AppConfig {
        smtp_host: "smtp.gmail.com".to_string(),
        smtp_port: 587,
        sender_email: None,
        sender_password: None,
        receiver_email: None,
        openai_api_hostname: "http://127.0.0.1:9".to_string(),
        openai_api_key: "test-api-key".to_string(),
        openai_model: "gpt-4.1-mini".to_string(),
        embedding_model: "text-embedding-3-small".to_string(),
        pdf_path: None,
        website_url: None,
        system_message: "You are a helpful assistant.".to_string(),
        context_mode: ContextMode::Static,
        notify_required: false,
        history_window: 5,
    }
}

/// Creates a test application router holding one fresh session.
pub fn test_app(config: AppConfig) -> Router {
    app(Arc::new(AppState::new(config)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not valid utf8")
}
