use std::env;

use crate::context::ContextMode;

/// Runtime configuration sourced from the environment.
///
/// Step-scoped settings (SMTP credentials, PDF path, website URL) are
/// optional: a missing value fails that step when it runs, never the
/// whole process.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender_email: Option<String>,
    pub sender_password: Option<String>,
    pub receiver_email: Option<String>,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub embedding_model: String,
    pub pdf_path: Option<String>,
    pub website_url: Option<String>,
    pub system_message: String,
    pub context_mode: ContextMode,
    pub notify_required: bool,
    pub history_window: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let smtp_host =
            env::var("INTAKE_SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let smtp_port = env::var("INTAKE_SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(587);
        let sender_email = env::var("INTAKE_SENDER_EMAIL").ok();
        let sender_password = env::var("INTAKE_SENDER_PASSWORD").ok();
        let receiver_email = env::var("INTAKE_RECEIVER_EMAIL").ok();
        let openai_api_hostname =
            env::var("INTAKE_LLM_HOST").unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model =
            env::var("INTAKE_LLM_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());
        let embedding_model = env::var("INTAKE_EMBEDDING_MODEL")
            .unwrap_or_else(|_| "text-embedding-3-small".to_string());
        let pdf_path = env::var("INTAKE_PDF_PATH").ok();
        let website_url = env::var("INTAKE_WEBSITE_URL").ok();
        let system_message = env::var("INTAKE_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| "You are a helpful assistant. Use the provided content.".to_string());
        let context_mode = env::var("INTAKE_CONTEXT_MODE")
            .map(|v| ContextMode::parse(&v))
            .unwrap_or_default();
        let notify_required = env::var("INTAKE_NOTIFY_REQUIRED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let history_window = env::var("INTAKE_HISTORY_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            smtp_host,
            smtp_port,
            sender_email,
            sender_password,
            receiver_email,
            openai_api_hostname,
            openai_api_key,
            openai_model,
            embedding_model,
            pdf_path,
            website_url,
            system_message,
            context_mode,
            notify_required,
            history_window,
        }
    }
}
