//! The core models for managing a stateful chat session.

use serde::{Deserialize, Serialize};

/// One exchanged pair of messages.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub user: String,
    pub bot: String,
}

/// Append-only, in-memory record of every exchanged pair. The stored
/// transcript is never truncated; windowing only affects what is sent to
/// the completion call.
#[derive(Default)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    /// The most recent `n` turns.
    pub fn window(&self, n: usize) -> &[Turn] {
        &self.0[self.0.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.0.iter()
    }
}
