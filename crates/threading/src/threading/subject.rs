//! Subject normalization for header-less threading
//!
//! Many bulk senders drop References headers entirely, so replies can only be
//! tied back to their conversation by subject. Normalization removes one layer
//! of reply/forward marker and all casing and spacing noise.

/// Reply and forward markers, compared case-insensitively
const REPLY_MARKERS: &[&str] = &["re:", "fwd:", "fw:"];

/// Normalize a subject line for comparison.
///
/// With `subject_normalization` disabled the subject is returned untouched.
/// Otherwise a single leading `Re:`/`Fwd:`/`Fw:` marker is stripped (inner
/// markers such as the second `Re:` in `Re: Re: foo` are kept), whitespace
/// runs collapse to one space and the result is lowercased.
///
/// ## Examples
///
/// ```rust
/// use threading::normalize_subject;
///
/// assert_eq!(normalize_subject("Re:  Weekly   Sync", true), "weekly sync");
/// assert_eq!(normalize_subject("Re: Re: Project X", true), "re: project x");
/// assert_eq!(normalize_subject("Re: Project X", false), "Re: Project X");
/// ```
pub fn normalize_subject(subject: &str, subject_normalization: bool) -> String {
    if !subject_normalization {
        return subject.to_string();
    }

    let stripped = strip_reply_marker(subject).unwrap_or(subject);

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Remove one leading reply marker, returning the remainder
fn strip_reply_marker(subject: &str) -> Option<&str> {
    REPLY_MARKERS.iter().find_map(|marker| {
        let head = subject.get(..marker.len())?;
        if head.eq_ignore_ascii_case(marker) {
            Some(subject[marker.len()..].trim_start())
        } else {
            None
        }
    })
}
