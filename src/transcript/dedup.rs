use std::collections::HashSet;

use serde_json::Value;

use crate::models::Record;
use crate::utils::{char_prefix, display_string};

/// Characters of each block's text kept in a fingerprint
const BLOCK_FINGERPRINT_CHARS: usize = 60;
/// Characters of non-array content kept in a fingerprint
const CONTENT_FINGERPRINT_CHARS: usize = 100;

/// Summarize message content for duplicate detection
///
/// Array content yields `type:prefix` per object block, joined by `|`, where the
/// prefix comes from the first of `text`, `name`, `thinking` present on the block.
/// Any other content yields the start of its string form.
pub fn content_fingerprint(content: &Value) -> String {
    match content {
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(Value::as_object)
            .map(|block| {
                let block_type = block.get("type").map_or_else(|| "?".to_string(), display_string);
                let label = ["text", "name", "thinking"]
                    .iter()
                    .find_map(|key| block.get(*key))
                    .map(display_string)
                    .unwrap_or_default();
                format!("{}:{}", block_type, char_prefix(&label, BLOCK_FINGERPRINT_CHARS))
            })
            .collect::<Vec<_>>()
            .join("|"),
        other => char_prefix(&display_string(other), CONTENT_FINGERPRINT_CHARS).to_string(),
    }
}

/// Collapses repeated streaming emissions of the same assistant message
///
/// Assistant messages are written once per content block while streaming, so the
/// same `(id, content)` pair can show up several times in a log.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<(String, String)>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time a record's key is seen and `false` for repeats
    ///
    /// Records that are not assistant messages or carry no message id are always
    /// admitted and never remembered.
    pub fn admit(&mut self, record: &Record) -> bool {
        let Some(id) = record.message_id.as_ref().filter(|_| record.is_assistant()) else {
            return true;
        };
        self.seen.insert((id.clone(), content_fingerprint(&record.content)))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
