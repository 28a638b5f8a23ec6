//! Session log to transcript pipeline
//!
//! Lines flow through dispatch, deduplication, extraction, and assembly in a
//! single pass. The whole transcript is built in memory and written once at the
//! end, so a failed run never leaves a partial output file behind.

pub mod assembler;
pub mod dedup;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

pub use assembler::{
    ASSISTANT_HEADER, Assembler, META_HEADER, Transcript, USER_HEADER, entry_header,
};
pub use dedup::{Deduplicator, content_fingerprint};

use crate::extractor::{ExtractOptions, extract_content_blocks};
use crate::models::RunSummary;
use crate::parsers::{Dispatch, dispatch_line};
use crate::utils::trim_text;

/// Render a session log read from `reader` into a transcript
///
/// # Errors
///
/// Returns an error only when reading from `reader` fails (including invalid UTF-8).
/// Unparseable or irrelevant lines are skipped.
pub fn render_transcript<R: BufRead>(reader: R, options: &ExtractOptions) -> Result<Transcript> {
    let mut assembler = Assembler::new();
    let mut dedup = Deduplicator::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of session log", line_num + 1))?;
        let line = trim_text(&line);

        // Skip empty lines
        if line.is_empty() {
            continue;
        }
        // Counted before parsing so malformed lines are included
        assembler.count_line();

        // Only user and assistant records carry conversation content
        let record = match dispatch_line(line) {
            Dispatch::Conversation(record) => record,
            Dispatch::Skipped(skipped) => {
                tracing::trace!(line = line_num + 1, skipped = %skipped, "skipping record type");
                assembler.count_skipped(skipped);
                continue;
            }
            Dispatch::Malformed | Dispatch::Empty => continue,
        };

        // Collapse repeated streaming emissions of the same assistant message
        if !dedup.admit(&record) {
            tracing::debug!(
                line = line_num + 1,
                message_id = record.message_id.as_deref().unwrap_or_default(),
                "skipping repeated assistant message"
            );
            continue;
        }

        let parts = extract_content_blocks(&record.content, &record.role, options);
        assembler.push(&record, &parts);
    }

    Ok(assembler.finish())
}

/// Convert the session log at `input` into a transcript written to `output`
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use transcript_extractor::extract_transcript;
///
/// let summary = extract_transcript(Path::new("session.jsonl"), Path::new("session.txt"))?;
/// println!("Wrote {} entries", summary.entries_written);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn extract_transcript(input: &Path, output: &Path) -> Result<RunSummary> {
    extract_transcript_with_options(input, output, &ExtractOptions::default())
}

/// [`extract_transcript`] with explicit display limits
pub fn extract_transcript_with_options(
    input: &Path,
    output: &Path,
    options: &ExtractOptions,
) -> Result<RunSummary> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open session log: {}", input.display()))?;
    let transcript = render_transcript(BufReader::new(file), options)
        .with_context(|| format!("Failed to read session log: {}", input.display()))?;

    fs::write(output, &transcript.text)
        .with_context(|| format!("Failed to write transcript: {}", output.display()))?;

    let summary = transcript.summary;
    tracing::debug!(
        lines_read = summary.lines_read,
        entries_written = summary.entries_written,
        output_chars = summary.output_chars,
        "transcript written to {}",
        output.display()
    );
    Ok(summary)
}
