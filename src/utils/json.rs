use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};

/// JSON formatter that separates items with `", "` and keys from values with `": "`
///
/// This is the layout most session viewers print tool inputs in, e.g. `{"path": "/a"}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize a value on a single line using [`SpacedFormatter`]
///
/// Object keys keep their input order and non-ASCII text is written verbatim.
pub fn to_spaced_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    // Writing a `Value` into a Vec cannot fail: keys are always strings and
    // the writer is infallible.
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

/// Loose truthiness of a JSON value
///
/// `null`, `false`, zero, and empty strings/arrays/objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Textual form of a value: strings verbatim, everything else as JSON text
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => to_spaced_json(other),
    }
}
