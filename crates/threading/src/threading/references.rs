//! Reference extraction from reply headers

use crate::models::EmailMessage;

/// Collect the ancestor Message-IDs a message points at.
///
/// `In-Reply-To` comes first, followed by `References` in header order.
/// Duplicates are removed by exact string match and blank values are
/// skipped, so a message with neither header yields an empty list.
pub fn extract_references(message: &EmailMessage) -> Vec<String> {
    let mut refs: Vec<String> = Vec::with_capacity(message.references.len() + 1);

    let candidates = message
        .in_reply_to
        .iter()
        .chain(message.references.iter());

    for id in candidates {
        if id.trim().is_empty() || refs.contains(id) {
            continue;
        }
        refs.push(id.clone());
    }

    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headers() {
        let msg = EmailMessage::builder("1", "<m1>").build();
        assert!(extract_references(&msg).is_empty());
    }

    #[test]
    fn test_in_reply_to_first_then_references() {
        let msg = EmailMessage::builder("3", "<m3>")
            .in_reply_to("<m2>")
            .references(["<m1>", "<m2>"])
            .build();
        assert_eq!(extract_references(&msg), vec!["<m2>", "<m1>"]);
    }

    #[test]
    fn test_duplicate_references_removed() {
        let msg = EmailMessage::builder("4", "<m4>")
            .references(["<m1>", "<m1>", "<m2>", " "])
            .build();
        assert_eq!(extract_references(&msg), vec!["<m1>", "<m2>"]);
    }
}
