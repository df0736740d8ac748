//! Query API for UI consumption
//!
//! Turns thread projections into the shapes the inbox list and conversation
//! view display.

mod threads;

pub use threads::{ThreadDetail, ThreadSummary, get_thread_detail, list_threads};
