//! The screen-gating state machine for one session.

/// Which screen a session is on. `Form` is the initial state; `Chat` is
/// terminal, with no transition back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Form,
    Chat,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Form => "form",
            SessionState::Chat => "chat",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A profile passed validation and the notification was attempted.
    ProfileAccepted,
    /// The user chose to skip the form.
    FormSkipped,
}

/// Pure reducer over session states, testable without any frontend.
pub fn reduce(state: SessionState, event: SessionEvent) -> SessionState {
    match (state, event) {
        (SessionState::Form, SessionEvent::ProfileAccepted) => SessionState::Chat,
        (SessionState::Form, SessionEvent::FormSkipped) => SessionState::Chat,
        (SessionState::Chat, _) => SessionState::Chat,
    }
}
