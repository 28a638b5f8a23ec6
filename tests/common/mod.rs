//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a temporary session log and the transcript path next to it
pub struct SessionFileBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a builder with no lines
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Append a record built with [`RecordBuilder`]
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Append a raw line verbatim (blank, malformed, or hand-written JSON)
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write `session.jsonl` and return the handle to the populated directory
    pub fn build(self) -> SessionFiles {
        let input = self.temp_dir.path().join("session.jsonl");
        fs::write(&input, self.lines.join("\n")).expect("Failed to write session.jsonl");
        let output = self.temp_dir.path().join("transcript.txt");
        SessionFiles { temp_dir: self.temp_dir, input, output }
    }
}

impl Default for SessionFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Paths of a written session log and its (not yet written) transcript
pub struct SessionFiles {
    temp_dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl SessionFiles {
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read the transcript written by a run
    pub fn transcript(&self) -> String {
        fs::read_to_string(&self.output).expect("Failed to read transcript")
    }
}

/// Builder for one session log record
pub struct RecordBuilder {
    entry_type: String,
    role: Option<String>,
    message_id: Option<String>,
    content: Value,
    is_meta: Option<bool>,
}

impl RecordBuilder {
    /// A user record with plain string content
    pub fn user() -> Self {
        Self {
            entry_type: "user".to_string(),
            role: Some("user".to_string()),
            message_id: None,
            content: json!("Test message"),
            is_meta: None,
        }
    }

    /// An assistant record with a single text block
    pub fn assistant() -> Self {
        Self {
            entry_type: "assistant".to_string(),
            role: Some("assistant".to_string()),
            message_id: None,
            content: json!([{"type": "text", "text": "Test response"}]),
            is_meta: None,
        }
    }

    /// Set plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = json!(text);
        self
    }

    /// Set content blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    /// Set the message id used for streaming dedup
    pub fn id(mut self, id: &str) -> Self {
        self.message_id = Some(id.to_string());
        self
    }

    /// Mark the record as meta (system-injected user content)
    pub fn meta(mut self) -> Self {
        self.is_meta = Some(true);
        self
    }

    /// Drop the `role` key so the record type is used instead
    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    pub fn text_block(text: &str) -> Value {
        json!({"type": "text", "text": text})
    }

    pub fn thinking_block(thinking: &str) -> Value {
        json!({"type": "thinking", "thinking": thinking, "signature": "sig"})
    }

    pub fn tool_use_block(id: &str, name: &str, input: Value) -> Value {
        json!({"type": "tool_use", "id": id, "name": name, "input": input})
    }

    pub fn tool_result_block(tool_use_id: &str, content: Value, is_error: bool) -> Value {
        json!({"type": "tool_result", "tool_use_id": tool_use_id, "content": content, "is_error": is_error})
    }

    pub fn image_block() -> Value {
        json!({"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "iVBOR"}})
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        let mut message = serde_json::Map::new();
        if let Some(role) = &self.role {
            message.insert("role".to_string(), json!(role));
        }
        if let Some(id) = &self.message_id {
            message.insert("id".to_string(), json!(id));
        }
        message.insert("content".to_string(), self.content.clone());

        let mut record = serde_json::Map::new();
        record.insert("type".to_string(), json!(self.entry_type));
        record.insert("message".to_string(), Value::Object(message));
        record.insert("sessionId".to_string(), json!("550e8400-e29b-41d4-a716-446655440000"));
        if let Some(is_meta) = self.is_meta {
            record.insert("isMeta".to_string(), json!(is_meta));
        }
        Value::Object(record).to_string()
    }
}

/// A realistic session: meta caveat, prompt, streamed assistant turn, tool round trip
pub fn realistic_session() -> SessionFiles {
    let streamed = |blocks: Vec<Value>| RecordBuilder::assistant().id("msg_01").blocks(blocks);

    SessionFileBuilder::new()
        .with_line(r#"{"type":"summary","summary":"Reading config","leafUuid":"e030aae0"}"#)
        .with_record(RecordBuilder::user().meta().text("Caveat: local commands follow"))
        .with_record(RecordBuilder::user().text("Read the config file"))
        .with_record(streamed(vec![RecordBuilder::thinking_block("Need to open it")]))
        .with_record(streamed(vec![RecordBuilder::thinking_block("Need to open it")]))
        .with_record(streamed(vec![RecordBuilder::tool_use_block(
            "toolu_1",
            "Read",
            json!({"file_path": "/etc/app.toml"}),
        )]))
        .with_line(r#"{"type":"file-history-snapshot","messageId":"m1","snapshot":{}}"#)
        .with_record(RecordBuilder::user().blocks(vec![RecordBuilder::tool_result_block(
            "toolu_1",
            json!([{"type": "text", "text": "port = 8080"}]),
            false,
        )]))
        .with_record(
            RecordBuilder::assistant()
                .id("msg_02")
                .blocks(vec![RecordBuilder::text_block("The app listens on port 8080.")]),
        )
        .build()
}

/// Expected transcript for [`realistic_session`]
pub const REALISTIC_TRANSCRIPT: &str = "--- SYSTEM/META ---
Caveat: local commands follow

--- USER ---
Read the config file

--- ASSISTANT ---
[THINKING: Need to open it]

--- ASSISTANT ---
[TOOL USE: Read - {\"file_path\": \"/etc/app.toml\"}]

--- USER ---
[TOOL RESULT: port = 8080]

--- ASSISTANT ---
The app listens on port 8080.
";
