use serde::Deserialize;
use serde_json::Value;

use crate::utils::{display_string, is_truthy};

/// One line of a session log, as loosely typed as the log itself
///
/// Every field defaults to `null` so that shape checks happen in the dispatcher
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type", default)]
    pub entry_type: Value,
    #[serde(default)]
    pub message: Value,
    #[serde(rename = "isMeta", default)]
    pub is_meta: Value,
}

/// The `message` object nested in a conversation record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMessage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_present")]
    pub role: Option<Value>,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub id: Value,
}

/// A user or assistant record that passed dispatch and carries content
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub entry_type: String,
    pub role: String,
    pub content: Value,
    pub message_id: Option<String>,
    pub is_meta: bool,
}

impl Record {
    /// Build a record from its parts, resolving role fallback, id, and meta flag
    pub fn new(entry_type: &str, message: RawMessage, is_meta: &Value) -> Self {
        let role = match &message.role {
            Some(role) => display_string(role),
            None => entry_type.to_string(),
        };
        let message_id = is_truthy(&message.id).then(|| display_string(&message.id));

        Self {
            entry_type: entry_type.to_string(),
            role,
            content: message.content,
            message_id,
            is_meta: is_truthy(is_meta),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }

    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }
}
