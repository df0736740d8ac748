//! Thread identifier generation
//!
//! The engine never reaches for a global random source directly. A generator
//! is injected so projections can be made reproducible in tests.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::ThreadId;

/// Source of fresh thread identifiers
pub trait ThreadIdGenerator: Send + Sync {
    /// Produce an identifier not handed out before
    fn next_id(&self) -> ThreadId;
}

impl<F> ThreadIdGenerator for F
where
    F: Fn() -> ThreadId + Send + Sync,
{
    fn next_id(&self) -> ThreadId {
        self()
    }
}

/// Random UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidThreadIds;

impl ThreadIdGenerator for UuidThreadIds {
    fn next_id(&self) -> ThreadId {
        ThreadId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic identifiers of the form `{prefix}-{n}`, starting at 1
#[derive(Debug)]
pub struct SequentialThreadIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialThreadIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialThreadIds {
    fn default() -> Self {
        Self::new("thread")
    }
}

impl ThreadIdGenerator for SequentialThreadIds {
    fn next_id(&self) -> ThreadId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ThreadId::new(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialThreadIds::new("t");
        assert_eq!(ids.next_id().as_str(), "t-1");
        assert_eq!(ids.next_id().as_str(), "t-2");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidThreadIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_closure_generator() {
        let generator = || ThreadId::new("fixed");
        assert_eq!(generator.next_id().as_str(), "fixed");
    }
}
