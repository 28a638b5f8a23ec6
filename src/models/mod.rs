//! Data models for session log records and run statistics.
//!
//! - [`RawRecord`] / [`RawMessage`] - loosely typed shapes deserialized from each line
//! - [`Record`] - a user or assistant record that survived dispatch
//! - [`Block`] - one typed element of a message's content array
//! - [`RunSummary`] - counters reported at the end of a run

pub mod block;
pub mod record;
pub mod summary;

pub use block::Block;
pub use record::{RawMessage, RawRecord, Record};
pub use summary::{RunSummary, SkippedType, SkippedTypes};
