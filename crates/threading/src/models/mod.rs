//! Domain models for messages and the threads built from them

mod message;
mod thread;

pub use message::{Attachment, EmailId, EmailMessage, EmailMessageBuilder};
pub use thread::{EmailThread, ThreadId};
