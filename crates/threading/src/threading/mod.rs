//! Conversation threading engine
//!
//! Groups individually received or sent messages into conversations the way a
//! mail client collapses a back-and-forth exchange.
//!
//! ## Matching strategy
//!
//! Two messages belong together when, in order of precedence:
//!
//! 1. **References**: one message's In-Reply-To/References names the other's
//!    Message-ID, or both name a common ancestor. This always wins.
//! 2. **Subject fallback**: the normalized subjects are equal and non-empty,
//!    and (with participant grouping on) the messages share a participant and
//!    arrived within the configured time window of each other.
//!
//! ## Module structure
//!
//! - `references`, `subject`, `participants`: signal extraction
//! - `matcher`: the pairwise match predicate
//! - `aggregator`: batch grouping of a message history
//! - `mutator`: incremental append, lookup and merge
//! - `ids`: injectable thread id generation

mod aggregator;
mod error;
mod ids;
mod matcher;
mod mutator;
pub mod participants;
pub mod references;
pub mod subject;

use std::fmt;

pub use error::ThreadingError;
pub use ids::{SequentialThreadIds, ThreadIdGenerator, UuidThreadIds};
pub use participants::{participants_overlap, resolve_participants};
pub use references::extract_references;
pub use subject::normalize_subject;

use crate::config::ThreadingOptions;

/// Thread subject used when the first message's subject normalizes to nothing
pub const NO_SUBJECT: &str = "No Subject";

/// Entry point for all threading operations.
///
/// The engine holds no message state; every call is a pure function of its
/// arguments, the options and the id generator. It is `Send + Sync` and can be
/// shared freely between webhook handlers.
pub struct ThreadingEngine {
    options: ThreadingOptions,
    ids: Box<dyn ThreadIdGenerator>,
}

impl ThreadingEngine {
    /// Create an engine that assigns random UUID thread ids
    pub fn new(options: ThreadingOptions) -> Self {
        Self::with_id_generator(options, UuidThreadIds)
    }

    /// Create an engine with a caller-supplied thread id source
    pub fn with_id_generator(
        options: ThreadingOptions,
        ids: impl ThreadIdGenerator + 'static,
    ) -> Self {
        Self {
            options,
            ids: Box::new(ids),
        }
    }

    pub fn options(&self) -> &ThreadingOptions {
        &self.options
    }

    /// Subject a new thread takes from its first message
    fn thread_subject(&self, raw: &str) -> String {
        let subject = normalize_subject(raw, self.options.subject_normalization);
        if subject.trim().is_empty() {
            NO_SUBJECT.to_string()
        } else {
            subject
        }
    }
}

impl Default for ThreadingEngine {
    fn default() -> Self {
        Self::new(ThreadingOptions::default())
    }
}

impl fmt::Debug for ThreadingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadingEngine")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
