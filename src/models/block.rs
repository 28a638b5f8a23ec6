use std::borrow::Cow;

use serde_json::Value;

use crate::utils::{display_string, is_truthy};

/// One element of a message's `content` array
///
/// Unrecognized tags, untagged objects, and non-object elements all land in
/// [`Block::Unknown`], which renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    /// A bare string element
    Plain(&'a str),
    Text(&'a str),
    ToolUse {
        name: Cow<'a, str>,
        input: Option<&'a Value>,
    },
    ToolResult {
        content: Option<&'a Value>,
        is_error: bool,
    },
    Thinking(&'a str),
    Unknown,
}

impl<'a> Block<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        let object = match value {
            Value::String(s) => return Block::Plain(s),
            Value::Object(object) => object,
            _ => return Block::Unknown,
        };

        match object.get("type").and_then(Value::as_str) {
            Some("text") => Block::Text(str_field(value, "text")),
            Some("tool_use") => Block::ToolUse {
                name: match object.get("name") {
                    Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
                    Some(other) => Cow::Owned(display_string(other)),
                    None => Cow::Borrowed("unknown"),
                },
                input: object.get("input"),
            },
            Some("tool_result") => Block::ToolResult {
                content: object.get("content"),
                is_error: object.get("is_error").is_some_and(is_truthy),
            },
            Some("thinking") => Block::Thinking(str_field(value, "thinking")),
            _ => Block::Unknown,
        }
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}
