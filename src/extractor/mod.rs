//! Turns message content into display lines
//!
//! Content is either a plain string or an array of typed blocks. Each block kind
//! has its own rendering; anything unrecognized renders nothing.

pub mod options;

use std::borrow::Cow;

use serde_json::Value;

pub use options::{ExtractOptions, THINKING_MAX, TOOL_INPUT_MAX, TOOL_RESULT_MAX};

use crate::models::Block;
use crate::utils::{to_spaced_json, trim_text, truncate};

/// Extract the non-empty display strings of one message's content, in order
///
/// `role` is accepted so callers can pass the message through unchanged; it does
/// not alter extraction.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use transcript_extractor::{ExtractOptions, extract_content_blocks};
///
/// let content = json!([
///     {"type": "text", "text": "Let me check."},
///     {"type": "tool_use", "name": "Read", "input": {"path": "/a"}},
/// ]);
/// let parts = extract_content_blocks(&content, "assistant", &ExtractOptions::default());
/// assert_eq!(parts, vec!["Let me check.", r#"[TOOL USE: Read - {"path": "/a"}]"#]);
/// ```
pub fn extract_content_blocks(
    content: &Value,
    _role: &str,
    options: &ExtractOptions,
) -> Vec<String> {
    match content {
        Value::String(text) => non_empty(trim_text(text)).into_iter().collect(),
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(|block| render_block(&Block::from_value(block), options))
            .collect(),
        _ => Vec::new(),
    }
}

/// Render a single block, or `None` when it contributes nothing
pub fn render_block(block: &Block<'_>, options: &ExtractOptions) -> Option<String> {
    match block {
        Block::Plain(text) | Block::Text(text) => non_empty(trim_text(text)),
        Block::ToolUse { name, input } => {
            let input = match input {
                Some(input) => to_spaced_json(input),
                None => "{}".to_string(),
            };
            Some(format!("[TOOL USE: {} - {}]", name, truncate(&input, options.tool_input_max)))
        }
        Block::ToolResult { content, is_error } => {
            let resolved = resolve_tool_result(*content);
            let summary = truncate(trim_text(&resolved), options.tool_result_max);
            if summary.is_empty() {
                return None;
            }
            let prefix = if *is_error { "TOOL ERROR" } else { "TOOL RESULT" };
            Some(format!("[{prefix}: {summary}]"))
        }
        Block::Thinking(text) if !text.is_empty() => {
            Some(format!("[THINKING: {}]", truncate(text, options.thinking_max)))
        }
        Block::Thinking(_) | Block::Unknown => None,
    }
}

/// Flatten a tool result's `content` into one string
///
/// Arrays contribute the text of their `text` blocks and bare strings, joined by
/// spaces. Any other non-string value is shown as JSON.
fn resolve_tool_result(content: Option<&Value>) -> Cow<'_, str> {
    match content {
        None => Cow::Borrowed(""),
        Some(Value::String(text)) => Cow::Borrowed(text),
        Some(Value::Array(items)) => {
            let snippets: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.as_str()),
                    Value::Object(object)
                        if object.get("type").and_then(Value::as_str) == Some("text") =>
                    {
                        Some(object.get("text").and_then(Value::as_str).unwrap_or(""))
                    }
                    _ => None,
                })
                .collect();
            Cow::Owned(snippets.join(" "))
        }
        Some(other) => Cow::Owned(to_spaced_json(other)),
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() { None } else { Some(text.to_string()) }
}
