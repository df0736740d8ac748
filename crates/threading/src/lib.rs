//! Threading crate - conversation grouping for forwarded email
//!
//! This crate turns a flat history of received and sent messages into
//! Gmail-style conversations:
//! - Domain models (EmailMessage, EmailThread)
//! - Signal extraction (references, normalized subjects, participants)
//! - Batch grouping and incremental append/merge via [`ThreadingEngine`]
//! - Options loading from the shared fwdmail config directory
//! - Query API for UI consumption
//!
//! The engine is pure and synchronous: no network or disk I/O happens while
//! threading, and every operation returns new values instead of mutating its
//! inputs. Persistence and webhook decoding belong to the caller.

pub mod config;
pub mod models;
pub mod query;
pub mod threading;

pub use config::ThreadingOptions;
pub use models::{Attachment, EmailId, EmailMessage, EmailMessageBuilder, EmailThread, ThreadId};
pub use query::{ThreadDetail, ThreadSummary, get_thread_detail, list_threads};
pub use threading::{
    NO_SUBJECT, SequentialThreadIds, ThreadIdGenerator, ThreadingEngine, ThreadingError,
    UuidThreadIds, extract_references, normalize_subject, participants_overlap,
    resolve_participants,
};
