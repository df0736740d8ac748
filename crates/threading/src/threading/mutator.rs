//! Incremental thread operations
//!
//! Every operation returns a new thread value; the threads passed in are never
//! modified.

use std::collections::HashSet;

use super::{ThreadingEngine, ThreadingError};
use crate::models::{EmailMessage, EmailThread};

impl ThreadingEngine {
    /// Find the first thread with a member that matches `message`
    pub fn find_thread_for_message<'a>(
        &self,
        threads: &'a [EmailThread],
        message: &EmailMessage,
    ) -> Option<&'a EmailThread> {
        threads
            .iter()
            .find(|thread| self.matches_any(message, &thread.messages))
    }

    /// Append a message to a thread it is known to belong to.
    ///
    /// Fails with [`ThreadingError::MessageNotInThread`] when no member of the
    /// thread matches the message. Re-adding a message whose id is already
    /// present returns the thread unchanged.
    pub fn add_message_to_thread(
        &self,
        thread: &EmailThread,
        message: EmailMessage,
    ) -> Result<EmailThread, ThreadingError> {
        if !self.matches_any(&message, &thread.messages) {
            log::warn!(
                "rejecting message {} for thread {}: no matching member",
                message.id,
                thread.id
            );
            return Err(ThreadingError::MessageNotInThread {
                thread_id: thread.id.clone(),
                email_id: message.id,
            });
        }

        if thread.contains(&message.id) {
            return Ok(thread.clone());
        }

        let mut messages = thread.messages.clone();
        messages.push(message);
        Ok(thread.with_messages(messages))
    }

    /// Merge two threads when any message of one matches any message of the other.
    ///
    /// The merged thread keeps `first`'s id and subject. Returns `None` when
    /// the threads are unrelated.
    pub fn merge_threads_if_needed(
        &self,
        first: &EmailThread,
        second: &EmailThread,
    ) -> Option<EmailThread> {
        let related = first
            .messages
            .iter()
            .any(|message| self.matches_any(message, &second.messages));
        if !related {
            return None;
        }

        let mut seen = HashSet::new();
        let messages: Vec<EmailMessage> = first
            .messages
            .iter()
            .chain(second.messages.iter())
            .filter(|message| seen.insert(message.id.clone()))
            .cloned()
            .collect();

        let merged = first.with_messages(messages);

        log::debug!(
            "merged thread {} into {} ({} messages)",
            second.id,
            first.id,
            merged.message_count
        );

        Some(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThreadingOptions;
    use crate::models::EmailId;
    use crate::threading::SequentialThreadIds;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
    }

    fn engine() -> ThreadingEngine {
        ThreadingEngine::with_id_generator(
            ThreadingOptions::default(),
            SequentialThreadIds::new("t"),
        )
    }

    fn root(id: &str, subject: &str, from: &str, hours: i64) -> EmailMessage {
        EmailMessage::builder(id, format!("<{}>", id))
            .from(from)
            .subject(subject)
            .received_at(t0() + Duration::hours(hours))
            .build()
    }

    fn reply(id: &str, parent: &str, from: &str, hours: i64) -> EmailMessage {
        EmailMessage::builder(id, format!("<{}>", id))
            .in_reply_to(format!("<{}>", parent))
            .from(from)
            .to(["team@acme.dev"])
            .subject("Re: anything")
            .received_at(t0() + Duration::hours(hours))
            .build()
    }

    fn single_thread(engine: &ThreadingEngine, message: EmailMessage) -> EmailThread {
        engine
            .group_messages_into_threads(&[message])
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_find_thread() {
        let engine = engine();
        let threads = engine.group_messages_into_threads(&[
            root("a", "Alpha", "a@x.io", 0),
            root("b", "Beta", "b@y.io", 1),
        ]);

        let found = engine
            .find_thread_for_message(&threads, &reply("c", "b", "c@z.io", 2))
            .unwrap();
        assert!(found.contains(&EmailId::new("b")));

        let unrelated = root("d", "Gamma", "d@w.io", 3);
        assert!(engine.find_thread_for_message(&threads, &unrelated).is_none());
    }

    #[test]
    fn test_add_message_sorts_and_recomputes() {
        let engine = engine();
        let thread = single_thread(&engine, root("a", "Alpha", "a@x.io", 5));

        // An earlier reply that references the root still lands first in order
        let added = engine
            .add_message_to_thread(&thread, reply("b", "a", "b@y.io", 1))
            .unwrap();

        assert_eq!(added.id, thread.id);
        assert_eq!(added.message_count, 2);
        assert_eq!(added.messages[0].id.as_str(), "b");
        assert_eq!(added.last_message_at, t0() + Duration::hours(5));
        assert!(added.participants.contains(&"team@acme.dev".to_string()));
        assert_eq!(thread.message_count, 1);
    }

    #[test]
    fn test_add_recomputes_stale_last_message_at() {
        let engine = engine();
        let mut thread = single_thread(&engine, root("a", "Alpha", "a@x.io", 0));
        thread.last_message_at = t0() + Duration::days(5);

        let added = engine
            .add_message_to_thread(&thread, reply("b", "a", "b@y.io", 1))
            .unwrap();
        assert_eq!(added.last_message_at, t0() + Duration::hours(1));
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let engine = engine();
        let thread = single_thread(&engine, root("a", "Alpha", "a@x.io", 0));
        let thread = engine
            .add_message_to_thread(&thread, reply("b", "a", "b@y.io", 1))
            .unwrap();

        let again = engine
            .add_message_to_thread(&thread, reply("b", "a", "b@y.io", 1))
            .unwrap();
        assert_eq!(again.message_count, 2);
        assert_eq!(again.messages.len(), 2);
    }

    #[test]
    fn test_add_unrelated_fails() {
        let engine = engine();
        let thread = single_thread(&engine, root("a", "Alpha", "a@x.io", 0));

        let err = engine
            .add_message_to_thread(&thread, root("z", "Other", "z@q.io", 1))
            .unwrap_err();
        assert_eq!(
            err,
            ThreadingError::MessageNotInThread {
                thread_id: thread.id.clone(),
                email_id: EmailId::new("z"),
            }
        );
        assert_eq!(err.to_string(), "message does not belong to this thread");
        assert_eq!(thread.message_count, 1);
    }

    #[test]
    fn test_merge_related_threads() {
        let engine = engine();
        let first = single_thread(&engine, root("a", "Alpha", "a@x.io", 0));
        let second = single_thread(&engine, reply("b", "a", "b@y.io", 4));

        let merged = engine.merge_threads_if_needed(&first, &second).unwrap();
        assert_eq!(merged.id, first.id);
        assert_eq!(merged.subject, first.subject);
        assert_eq!(merged.message_count, 2);
        assert_eq!(merged.last_message_at, second.last_message_at);
        assert_eq!(
            merged.participants,
            vec!["a@x.io", "b@y.io", "team@acme.dev"]
        );
    }

    #[test]
    fn test_merge_recomputes_stale_last_message_at() {
        let engine = engine();
        let first = single_thread(&engine, root("a", "Alpha", "a@x.io", 0));
        let mut second = single_thread(&engine, reply("b", "a", "b@y.io", 2));
        second.last_message_at = t0() + Duration::days(3);

        let merged = engine.merge_threads_if_needed(&first, &second).unwrap();
        assert_eq!(merged.last_message_at, t0() + Duration::hours(2));
    }

    #[test]
    fn test_merge_dedupes_shared_messages() {
        let engine = engine();
        let first = single_thread(&engine, root("a", "Alpha", "a@x.io", 0));
        let second = engine
            .add_message_to_thread(&first, reply("b", "a", "b@y.io", 1))
            .unwrap();

        let merged = engine.merge_threads_if_needed(&first, &second).unwrap();
        assert_eq!(merged.message_count, 2);
    }

    #[test]
    fn test_merge_unrelated_returns_none() {
        let engine = engine();
        let first = single_thread(&engine, root("a", "Alpha", "a@x.io", 0));
        let second = single_thread(&engine, root("b", "Beta", "b@y.io", 1));
        assert!(engine.merge_threads_if_needed(&first, &second).is_none());
    }
}
