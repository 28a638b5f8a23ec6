use crate::models::{Record, RunSummary, SkippedType};

pub const META_HEADER: &str = "--- SYSTEM/META ---";
pub const USER_HEADER: &str = "--- USER ---";
pub const ASSISTANT_HEADER: &str = "--- ASSISTANT ---";

/// Header line for an entry
///
/// Any role other than `user` is shown as the assistant.
pub fn entry_header(role: &str, is_meta: bool) -> &'static str {
    match (role, is_meta) {
        ("user", true) => META_HEADER,
        ("user", false) => USER_HEADER,
        _ => ASSISTANT_HEADER,
    }
}

/// A rendered transcript together with the statistics of the run that built it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub summary: RunSummary,
}

/// Accumulates entries and counters for a single run
#[derive(Debug, Default)]
pub struct Assembler {
    entries: Vec<String>,
    summary: RunSummary,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_line(&mut self) {
        self.summary.lines_read += 1;
    }

    pub fn count_skipped(&mut self, skipped: SkippedType) {
        self.summary.skipped_types.record(skipped);
    }

    /// Append an entry for `record`; records with no parts leave no trace
    pub fn push(&mut self, record: &Record, parts: &[String]) {
        if parts.is_empty() {
            return;
        }
        let header = entry_header(&record.role, record.is_meta);
        self.entries.push(format!("{}\n{}\n", header, parts.join("\n")));
        self.summary.entries_written += 1;
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Join entries with one blank line between them
    pub fn finish(self) -> Transcript {
        let text = self.entries.join("\n");
        let mut summary = self.summary;
        summary.output_chars = text.chars().count();
        Transcript { text, summary }
    }
}
