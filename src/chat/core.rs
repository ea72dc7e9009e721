use anyhow::{Error, Result};
use serde_json::json;

use super::models::{Transcript, Turn};
use super::prompt::{self, Prompt};
use crate::context::{ContextDocument, ContextMode, select_document};
use crate::core::AppConfig;
use crate::openai::{Message, Role, completion, completion_text};

// Messages matching this set (case-insensitively, after trimming) are
// answered without a completion call.
const GREETINGS: &[&str] = &["hi", "hello", "hey", "salam"];

const GREETING_REPLY: &str = "Hello! How can I help you today?";

/// The context-assembly and reply step for a chat session.
///
/// Owns the transcript and produces exactly one reply per user message:
/// assemble the context block per the configured policy, send the system
/// instruction plus windowed history plus context and question to the
/// completion API, and append the exchanged pair. Every external failure
/// is converted into a reply string so the session always continues.
pub struct Chat {
    api_hostname: String,
    api_key: String,
    model: String,
    embedding_model: String,
    system_message: String,
    context_mode: ContextMode,
    history_window: usize,
    transcript: Transcript,
}

impl Chat {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_hostname: config.openai_api_hostname.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            embedding_model: config.embedding_model.clone(),
            system_message: config.system_message.clone(),
            context_mode: config.context_mode,
            history_window: config.history_window,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs the next turn in the chat. Always returns a reply string and
    /// appends exactly one transcript pair; failures become the reply.
    pub async fn next_msg(&mut self, question: &str, docs: &[ContextDocument]) -> String {
        let reply = if is_greeting(question) {
            GREETING_REPLY.to_string()
        } else {
            match self.generate_reply(question, docs).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("Reply generation failed: {}", e);
                    format!("Error generating response: {}", e)
                }
            }
        };

        self.transcript.push(Turn {
            user: question.to_string(),
            bot: reply.clone(),
        });
        reply
    }

    async fn generate_reply(
        &self,
        question: &str,
        docs: &[ContextDocument],
    ) -> Result<String, Error> {
        let selected: Vec<&ContextDocument> = match self.context_mode {
            ContextMode::Static => docs.iter().collect(),
            ContextMode::Retrieval if docs.is_empty() => Vec::new(),
            ContextMode::Retrieval => {
                let doc = select_document(
                    question,
                    docs,
                    &self.api_hostname,
                    &self.api_key,
                    &self.embedding_model,
                )
                .await?;
                vec![doc]
            }
        };

        let messages = build_messages(
            &self.system_message,
            self.transcript.window(self.history_window),
            &selected,
            question,
        )?;
        let resp = completion(&messages, &self.api_hostname, &self.api_key, &self.model).await?;
        completion_text(&resp)
    }
}

pub(crate) fn is_greeting(msg: &str) -> bool {
    let normalized = msg.trim().to_lowercase();
    GREETINGS.contains(&normalized.as_str())
}

/// Build the message list for one completion call: system instruction,
/// windowed prior turns, then a final user message combining the context
/// block with the question.
pub(crate) fn build_messages(
    system_message: &str,
    history: &[Turn],
    docs: &[&ContextDocument],
    question: &str,
) -> Result<Vec<Message>, Error> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);
    messages.push(Message::new(Role::System, system_message));
    for turn in history {
        messages.push(Message::new(Role::User, &turn.user));
        messages.push(Message::new(Role::Assistant, &turn.bot));
    }

    let templates = prompt::templates();
    let content = templates.render(
        &Prompt::ContextQuestion.to_string(),
        &json!({
            "documents": docs.iter().map(|d| d.to_template_value()).collect::<Vec<_>>(),
            "question": question,
        }),
    )?;
    messages.push(Message::new(Role::User, content.trim()));

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextSource;
    use serde_json::json;

    fn test_config(api_hostname: &str, context_mode: ContextMode) -> AppConfig {
        AppConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            sender_email: None,
            sender_password: None,
            receiver_email: None,
            openai_api_hostname: api_hostname.to_string(),
            openai_api_key: "test-key".to_string(),
            openai_model: "gpt-4".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            pdf_path: None,
            website_url: None,
            system_message: "You are a helpful assistant.".to_string(),
            context_mode,
            notify_required: false,
            history_window: 5,
        }
    }

    fn test_docs() -> Vec<ContextDocument> {
        vec![
            ContextDocument {
                source: ContextSource::Website,
                text: "alpha document".to_string(),
            },
            ContextDocument {
                source: ContextSource::Pdf,
                text: "beta document".to_string(),
            },
        ]
    }

    fn completion_body(reply: &str) -> String {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1694268190,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": reply},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    #[test]
    fn test_is_greeting() {
        assert!(is_greeting("hello"));
        assert!(is_greeting("  Hello "));
        assert!(is_greeting("HEY"));
        assert!(!is_greeting("hello there"));
        assert!(!is_greeting("what courses do you offer?"));
    }

    #[test]
    fn test_build_messages_windows_history() {
        let mut transcript = Transcript::new();
        for i in 0..8 {
            transcript.push(Turn {
                user: format!("question {}", i),
                bot: format!("answer {}", i),
            });
        }

        let messages =
            build_messages("system", transcript.window(5), &[], "question 8").unwrap();

        // 1 system + 5 windowed pairs + the current message
        assert_eq!(messages.len(), 12);
        assert_eq!(messages[0], Message::new(Role::System, "system"));
        assert_eq!(messages[1], Message::new(Role::User, "question 3"));
        assert_eq!(messages[10], Message::new(Role::Assistant, "answer 7"));
        assert_eq!(messages[11], Message::new(Role::User, "Question: question 8"));
    }

    #[test]
    fn test_build_messages_includes_every_document() {
        let docs = test_docs();
        let doc_refs: Vec<&ContextDocument> = docs.iter().collect();
        let messages = build_messages("system", &[], &doc_refs, "what?").unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages[1].content,
            "Website Content:\nalpha document\n\nPDF Content:\nbeta document\n\nQuestion: what?"
        );
    }

    #[tokio::test]
    async fn test_greeting_skips_completion_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create();

        let config = test_config(&server.url(), ContextMode::Static);
        let mut chat = Chat::from_config(&config);

        let reply = chat.next_msg("hello", &test_docs()).await;

        mock.assert();
        assert_eq!(reply, GREETING_REPLY);
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript().turns()[0].bot, GREETING_REPLY);
    }

    #[tokio::test]
    async fn test_static_mode_sends_every_document() {
        let mut server = mockito::Server::new_async().await;

        let expected_body = json!({
            "model": "gpt-4",
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "Website Content:\nalpha document\n\nPDF Content:\nbeta document\n\nQuestion: what do you offer?"}
            ]
        });
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(mockito::Matcher::Json(expected_body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("We offer courses."))
            .create();

        let config = test_config(&server.url(), ContextMode::Static);
        let mut chat = Chat::from_config(&config);

        let reply = chat.next_msg("what do you offer?", &test_docs()).await;

        mock.assert();
        assert_eq!(reply, "We offer courses.");
        assert_eq!(chat.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_retrieval_mode_sends_only_selected_document() {
        let mut server = mockito::Server::new_async().await;

        // The question embedding aligns with the second document
        let embeddings_body = r#"{
            "object": "list",
            "data": [
                {"object": "embedding", "index": 0, "embedding": [0.0, 1.0]},
                {"object": "embedding", "index": 1, "embedding": [1.0, 0.0]},
                {"object": "embedding", "index": 2, "embedding": [0.0, 0.9]}
            ],
            "model": "text-embedding-3-small"
        }"#;
        let embeddings_mock = server
            .mock("POST", "/v1/embeddings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(embeddings_body)
            .create();

        let expected_body = json!({
            "model": "gpt-4",
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "PDF Content:\nbeta document\n\nQuestion: what do you offer?"}
            ]
        });
        let completion_mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(mockito::Matcher::Json(expected_body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("From the brochure."))
            .create();

        let config = test_config(&server.url(), ContextMode::Retrieval);
        let mut chat = Chat::from_config(&config);

        let reply = chat.next_msg("what do you offer?", &test_docs()).await;

        embeddings_mock.assert();
        completion_mock.assert();
        assert_eq!(reply, "From the brochure.");
    }

    #[tokio::test]
    async fn test_completion_failure_becomes_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .with_body("upstream blew up")
            .create();

        let config = test_config(&server.url(), ContextMode::Static);
        let mut chat = Chat::from_config(&config);

        let reply = chat.next_msg("what do you offer?", &[]).await;

        mock.assert();
        assert!(
            reply.starts_with("Error generating response:"),
            "got: {}",
            reply
        );
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript().turns()[0].bot, reply);
    }
}
