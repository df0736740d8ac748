//! Batch grouping of a message history into threads

use std::collections::HashSet;

use super::ThreadingEngine;
use crate::models::{EmailId, EmailMessage, EmailThread};

impl ThreadingEngine {
    /// Partition a message history into conversation threads.
    ///
    /// Messages are visited oldest first (stable on ties). Each message joins
    /// the first thread, in creation order, that has any member matching it;
    /// otherwise it starts a new thread. A message id is placed at most once.
    ///
    /// The result is ordered by `last_message_at` descending, most recently
    /// active conversation first.
    pub fn group_messages_into_threads(&self, messages: &[EmailMessage]) -> Vec<EmailThread> {
        let mut ordered: Vec<&EmailMessage> = messages.iter().collect();
        ordered.sort_by_key(|m| m.received_at);

        let mut assigned: HashSet<&EmailId> = HashSet::with_capacity(messages.len());
        let mut threads: Vec<EmailThread> = Vec::new();

        for message in ordered {
            if !assigned.insert(&message.id) {
                log::debug!("skipping duplicate message {}", message.id);
                continue;
            }

            match threads
                .iter_mut()
                .find(|thread| self.matches_any(message, &thread.messages))
            {
                Some(thread) => thread.push(message.clone()),
                None => {
                    let subject = self.thread_subject(&message.subject);
                    threads.push(EmailThread::start(
                        self.ids.next_id(),
                        subject,
                        message.clone(),
                    ));
                }
            }
        }

        threads.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));

        log::debug!(
            "grouped {} messages into {} threads",
            messages.len(),
            threads.len()
        );

        threads
    }
}
