//! Participant resolution

use crate::models::EmailMessage;

/// Distinct addresses on the `from`, `to` and `cc` lines of a message.
///
/// `bcc` is left out: blind-copied recipients are neither a matching signal
/// nor visible thread metadata. Addresses are compared exactly; callers are
/// expected to have lower-cased them already.
///
/// Empty addresses are dropped, so unlike a plain `{from} ∪ to ∪ cc` union
/// two messages with a blank `from` do not overlap on it.
pub fn resolve_participants(message: &EmailMessage) -> Vec<String> {
    let mut participants = Vec::with_capacity(1 + message.to.len() + message.cc.len());
    let addresses = std::iter::once(&message.from)
        .chain(message.to.iter())
        .chain(message.cc.iter());

    for address in addresses {
        if !address.is_empty() && !participants.contains(address) {
            participants.push(address.clone());
        }
    }
    participants
}

/// Whether two participant lists have at least one address in common
pub fn participants_overlap(a: &[String], b: &[String]) -> bool {
    a.iter().any(|address| b.contains(address))
}

/// Union `incoming` into `participants`, keeping first-seen order
pub(crate) fn merge_participants(participants: &mut Vec<String>, incoming: Vec<String>) {
    for address in incoming {
        if !participants.contains(&address) {
            participants.push(address);
        }
    }
}
