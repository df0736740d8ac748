//! Pairwise match predicate

use chrono::{DateTime, Duration, Utc};

use super::ThreadingEngine;
use super::participants::{participants_overlap, resolve_participants};
use super::references::extract_references;
use super::subject::normalize_subject;
use crate::models::EmailMessage;

impl ThreadingEngine {
    /// Decide whether two messages belong to the same conversation.
    ///
    /// Reference headers are checked first and win outright. Only when they
    /// are disabled or inconclusive does the subject fallback run, gated by
    /// participant overlap and the time window when participant grouping is on.
    pub fn messages_match(&self, a: &EmailMessage, b: &EmailMessage) -> bool {
        if self.options.references_tracking && references_match(a, b) {
            log::trace!("{} matches {} by references", a.id, b.id);
            return true;
        }

        if !self.options.subject_normalization {
            return false;
        }

        let subject_a = normalize_subject(&a.subject, true);
        if subject_a.is_empty() || subject_a != normalize_subject(&b.subject, true) {
            return false;
        }

        if !self.options.participant_grouping {
            log::trace!("{} matches {} by subject", a.id, b.id);
            return true;
        }

        if !participants_overlap(&resolve_participants(a), &resolve_participants(b)) {
            return false;
        }

        let matched = within_window(
            a.received_at,
            b.received_at,
            self.options.time_window_hours,
        );
        if matched {
            log::trace!("{} matches {} by subject and participants", a.id, b.id);
        }
        matched
    }

    /// Whether `message` matches any member of `members`
    pub(crate) fn matches_any(&self, message: &EmailMessage, members: &[EmailMessage]) -> bool {
        members.iter().any(|member| self.messages_match(message, member))
    }
}

/// Direct reply in either direction, or a shared ancestor
fn references_match(a: &EmailMessage, b: &EmailMessage) -> bool {
    let refs_a = extract_references(a);
    let refs_b = extract_references(b);

    refs_a.contains(&b.message_id)
        || refs_b.contains(&a.message_id)
        || refs_a.iter().any(|id| refs_b.contains(id))
}

/// Inclusive window check: a gap of exactly `hours` still matches
fn within_window(a: DateTime<Utc>, b: DateTime<Utc>, hours: u32) -> bool {
    let gap = if a >= b { a - b } else { b - a };
    gap <= Duration::hours(i64::from(hours))
}
