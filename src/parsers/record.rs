use serde_json::Value;

use crate::models::{RawMessage, RawRecord, Record, SkippedType};
use crate::utils::is_truthy;

/// Outcome of inspecting one non-blank line
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// Not JSON, or JSON that is not an object
    Malformed,
    /// A record whose top-level `type` is not user or assistant
    Skipped(SkippedType),
    /// A user or assistant record without usable message content
    Empty,
    Conversation(Record),
}

/// Parse a trimmed, non-blank line and decide what to do with it
pub fn dispatch_line(line: &str) -> Dispatch {
    match serde_json::from_str::<Value>(line) {
        Ok(value) => dispatch_value(value),
        Err(e) => {
            tracing::debug!(error = %e, "skipping line that is not valid JSON");
            Dispatch::Malformed
        }
    }
}

/// Classify an already parsed record
pub fn dispatch_value(value: Value) -> Dispatch {
    // Struct deserialization would also accept arrays positionally
    if !value.is_object() {
        tracing::debug!("skipping top-level JSON value that is not an object");
        return Dispatch::Malformed;
    }
    let raw: RawRecord = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "skipping record with unreadable top-level fields");
            return Dispatch::Malformed;
        }
    };

    let entry_type = match raw.entry_type.as_str() {
        Some(t @ ("user" | "assistant")) => t.to_string(),
        _ => return Dispatch::Skipped(SkippedType::from_value(&raw.entry_type)),
    };

    if !raw.message.is_object() || !is_truthy(&raw.message) {
        tracing::trace!(entry_type = %entry_type, "record has no message");
        return Dispatch::Empty;
    }
    let message: RawMessage = match serde_json::from_value(raw.message) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(error = %e, "skipping record with unreadable message");
            return Dispatch::Empty;
        }
    };
    if !is_truthy(&message.content) {
        tracing::trace!(entry_type = %entry_type, "message has no content");
        return Dispatch::Empty;
    }

    Dispatch::Conversation(Record::new(&entry_type, message, &raw.is_meta))
}
