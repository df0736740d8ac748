//! Thread model representing a conversation assembled from messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EmailId, EmailMessage};
use crate::threading::participants::{merge_participants, resolve_participants};

/// Identifier generated when a thread is first created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub String);

impl ThreadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ThreadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ThreadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A conversation derived from one or more messages.
///
/// Threads are projections: `message_count`, `last_message_at` and
/// `participants` are always recomputed from `messages` and never set
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailThread {
    pub id: ThreadId,
    /// Normalized subject of the first message, or "No Subject"
    pub subject: String,
    /// Distinct from/to/cc addresses across all messages, first-seen order
    pub participants: Vec<String>,
    /// Always equal to `messages.len()`
    pub message_count: usize,
    /// Latest `received_at` among the messages
    pub last_message_at: DateTime<Utc>,
    pub messages: Vec<EmailMessage>,
}

impl EmailThread {
    /// Start a thread with a single message
    pub(crate) fn start(id: ThreadId, subject: String, message: EmailMessage) -> Self {
        Self {
            id,
            subject,
            participants: resolve_participants(&message),
            message_count: 1,
            last_message_at: message.received_at,
            messages: vec![message],
        }
    }

    /// Append a message in place. Only used while a thread is being built.
    pub(crate) fn push(&mut self, message: EmailMessage) {
        merge_participants(&mut self.participants, resolve_participants(&message));
        self.last_message_at = self.last_message_at.max(message.received_at);
        self.messages.push(message);
        self.message_count = self.messages.len();
    }

    /// Build a new thread with this thread's id and subject over `messages`.
    ///
    /// Messages are sorted by `received_at` (stable) and every derived field
    /// is recomputed.
    pub(crate) fn with_messages(&self, mut messages: Vec<EmailMessage>) -> Self {
        messages.sort_by_key(|m| m.received_at);

        let mut participants = Vec::new();
        for message in &messages {
            merge_participants(&mut participants, resolve_participants(message));
        }

        let last_message_at = messages
            .iter()
            .map(|m| m.received_at)
            .max()
            .unwrap_or(self.last_message_at);

        Self {
            id: self.id.clone(),
            subject: self.subject.clone(),
            participants,
            message_count: messages.len(),
            last_message_at,
            messages,
        }
    }

    /// Check whether a message with this storage id is part of the thread
    pub fn contains(&self, id: &EmailId) -> bool {
        self.messages.iter().any(|m| &m.id == id)
    }

    /// Earliest message by `received_at`
    pub fn first_message(&self) -> Option<&EmailMessage> {
        self.messages.iter().min_by_key(|m| m.received_at)
    }

    /// Most recent message by `received_at`
    pub fn latest_message(&self) -> Option<&EmailMessage> {
        self.messages.iter().max_by_key(|m| m.received_at)
    }
}
