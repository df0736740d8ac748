//! Thread views for the inbox UI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EmailMessage, EmailThread, ThreadId};

/// Maximum snippet length, in characters
const SNIPPET_CHARS: usize = 200;

/// Summary information for displaying a thread in a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummary {
    /// Thread ID
    pub id: ThreadId,
    /// Normalized thread subject
    pub subject: String,
    /// Preview of the latest message's plain-text body
    pub snippet: String,
    /// Timestamp of the most recent message
    pub last_message_at: DateTime<Utc>,
    /// Number of messages in the thread
    pub message_count: usize,
    /// Everyone on from/to/cc across the thread
    pub participants: Vec<String>,
    /// Sender of the earliest message
    pub sender: String,
    /// Whether any message carries attachments
    pub has_attachments: bool,
}

impl From<&EmailThread> for ThreadSummary {
    fn from(thread: &EmailThread) -> Self {
        Self {
            id: thread.id.clone(),
            subject: thread.subject.clone(),
            snippet: thread.latest_message().map(snippet).unwrap_or_default(),
            last_message_at: thread.last_message_at,
            message_count: thread.message_count,
            participants: thread.participants.clone(),
            sender: thread
                .first_message()
                .map(|m| m.from.clone())
                .unwrap_or_default(),
            has_attachments: thread.messages.iter().any(|m| !m.attachments.is_empty()),
        }
    }
}

/// Detailed thread information including all messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadDetail {
    /// The thread metadata
    pub summary: ThreadSummary,
    /// All messages in the thread, ordered chronologically
    pub messages: Vec<EmailMessage>,
}

/// List a page of threads.
///
/// The slice is expected in display order, as returned by
/// `group_messages_into_threads` (newest activity first).
///
/// # Arguments
/// * `threads` - Threads in display order
/// * `limit` - Maximum number of threads to return
/// * `offset` - Number of threads to skip
pub fn list_threads(threads: &[EmailThread], limit: usize, offset: usize) -> Vec<ThreadSummary> {
    threads
        .iter()
        .skip(offset)
        .take(limit)
        .map(ThreadSummary::from)
        .collect()
}

/// Get a thread and its messages in chronological order
pub fn get_thread_detail(threads: &[EmailThread], thread_id: &ThreadId) -> Option<ThreadDetail> {
    let thread = threads.iter().find(|t| &t.id == thread_id)?;

    let mut messages = thread.messages.clone();
    messages.sort_by_key(|m| m.received_at);

    Some(ThreadDetail {
        summary: ThreadSummary::from(thread),
        messages,
    })
}

/// Collapse the body's whitespace and cut it to the snippet length
fn snippet(message: &EmailMessage) -> String {
    let Some(body) = message.body_text.as_deref() else {
        return String::new();
    };

    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(SNIPPET_CHARS).collect()
}
