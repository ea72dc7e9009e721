//! One user session: the state machine, the collected profile, the chat
//! transcript, and the per-session context-document cache.

pub mod state;
pub use state::{SessionEvent, SessionState, reduce};

use anyhow::{Error, Result, bail};
use serde::Serialize;

use crate::chat::{Chat, Transcript};
use crate::context::{self, ContextDocument};
use crate::core::AppConfig;
use crate::notify;
use crate::profile::{FieldError, Profile, validate};

/// The sole mutable state carried across turns. Created on session start,
/// discarded on session end; nothing is persisted.
pub struct Session {
    pub state: SessionState,
    pub profile: Option<Profile>,
    chat: Chat,
    context_docs: Option<Vec<ContextDocument>>,
}

/// What happened to a profile submission that passed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub transitioned: bool,
    pub notification_error: Option<String>,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: SessionState::Form,
            profile: None,
            chat: Chat::from_config(config),
            context_docs: None,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        self.chat.transcript()
    }

    /// Validate the profile and attempt the notification email. A send
    /// failure only blocks the transition to chat when `notify_required`
    /// is set; validation failures never submit anything.
    pub async fn submit_profile(
        &mut self,
        config: &AppConfig,
        profile: Profile,
    ) -> Result<SubmitOutcome, FieldError> {
        validate(&profile)?;

        let notification_error = match notify::send_profile_email(config, &profile).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("Profile notification failed: {}", e);
                Some(format!("Error sending email: {}", e))
            }
        };

        let transitioned = notification_error.is_none() || !config.notify_required;
        if transitioned {
            self.profile = Some(profile);
            self.state = reduce(self.state, SessionEvent::ProfileAccepted);
        }

        Ok(SubmitOutcome {
            transitioned,
            notification_error,
        })
    }

    /// Skip the form and go straight to chat.
    pub fn skip_form(&mut self) {
        self.state = reduce(self.state, SessionEvent::FormSkipped);
    }

    /// Handle one chat turn. Context documents are fetched on the first
    /// turn and reused for the rest of the session.
    pub async fn send_message(&mut self, config: &AppConfig, message: &str) -> Result<String, Error> {
        if self.state != SessionState::Chat {
            bail!("The profile form must be completed or skipped before chatting");
        }
        if message.trim().is_empty() {
            bail!("Message must not be empty");
        }

        if self.context_docs.is_none() {
            self.context_docs = Some(context::fetch_documents(config).await);
        }
        let docs = self.context_docs.as_deref().unwrap_or(&[]);

        Ok(self.chat.next_msg(message, docs).await)
    }
}
