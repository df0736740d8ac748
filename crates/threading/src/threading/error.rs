//! Errors raised by the threading engine

use crate::models::{EmailId, ThreadId};

/// A caller asserted a thread relationship the matcher does not support
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThreadingError {
    #[error("message does not belong to this thread")]
    MessageNotInThread {
        thread_id: ThreadId,
        /// Storage `id` of the rejected message, not its Message-ID header
        email_id: EmailId,
    },
}
