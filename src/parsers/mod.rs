//! Line-level parsing for session logs
//!
//! # Error Handling Strategy
//!
//! Session logs mix conversation records with snapshots, summaries, and the odd
//! truncated write. Parsing is therefore best-effort and never fails a run:
//!
//! - **Malformed lines** (invalid JSON, or JSON that is not an object) are skipped
//!   and only reported through `debug` logging.
//! - **Other record types** are skipped and counted per `type` value so the run
//!   summary shows what was left out.
//! - **User/assistant records without message content** are skipped silently.
//!
//! Only I/O errors reading the file itself are propagated, via `anyhow::Result`.

pub mod deserializers;
pub mod record;

pub use record::{Dispatch, dispatch_line, dispatch_value};
