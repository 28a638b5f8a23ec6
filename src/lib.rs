//! Transcript Extractor - Flatten Claude Code session logs into readable transcripts
//!
//! A session log is a JSONL file with one record per line. This crate turns the
//! user and assistant records into a plain-text transcript:
//!
//! - Parsing each line best-effort and tallying record types that are skipped
//! - Rendering text, tool use, tool result, and thinking blocks as display lines
//! - Collapsing repeated streaming emissions of the same assistant message
//! - Truncating long tool payloads and reasoning for readability
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use transcript_extractor::extract_transcript;
//!
//! let summary = extract_transcript(Path::new("session.jsonl"), Path::new("session.txt"))?;
//! println!("Wrote {} entries ({} chars)", summary.entries_written, summary.output_chars);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod extractor;
pub mod models;
pub mod parsers;
pub mod transcript;
pub mod utils;

// Re-export commonly used types
pub use extractor::{ExtractOptions, extract_content_blocks};
pub use models::{Record, RunSummary, SkippedType, SkippedTypes};
pub use transcript::{
    Transcript, content_fingerprint, entry_header, extract_transcript,
    extract_transcript_with_options, render_transcript,
};
pub use utils::truncate;
