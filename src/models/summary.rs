use std::fmt;

use serde_json::Value;

use crate::utils::to_spaced_json;

/// Top-level `type` value of a record that was not a user or assistant entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SkippedType {
    /// `type` was absent or `null`
    Missing,
    Named(String),
    /// Any other value: booleans as `True`/`False`, the rest as JSON text
    Other(String),
}

impl SkippedType {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => SkippedType::Missing,
            Value::String(s) => SkippedType::Named(s.clone()),
            Value::Bool(true) => SkippedType::Other("True".to_string()),
            Value::Bool(false) => SkippedType::Other("False".to_string()),
            other => SkippedType::Other(to_spaced_json(other)),
        }
    }
}

impl fmt::Display for SkippedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkippedType::Missing => f.write_str("None"),
            SkippedType::Named(name) => write_quoted(f, name),
            SkippedType::Other(json) => f.write_str(json),
        }
    }
}

/// Quote a string the way a mapping literal does: single quotes unless the text
/// contains a single quote and no double quote
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

/// Occurrence counts of skipped record types, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkippedTypes {
    counts: Vec<(SkippedType, usize)>,
}

impl SkippedTypes {
    pub fn record(&mut self, skipped: SkippedType) {
        match self.counts.iter_mut().find(|(seen, _)| *seen == skipped) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((skipped, 1)),
        }
    }

    pub fn get(&self, skipped: &SkippedType) -> usize {
        self.counts.iter().find(|(seen, _)| seen == skipped).map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SkippedType, usize)> {
        self.counts.iter().map(|(skipped, count)| (skipped, *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl fmt::Display for SkippedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (skipped, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{skipped}: {count}")?;
        }
        f.write_str("}")
    }
}

/// Statistics gathered over one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank input lines, counted before parsing
    pub lines_read: usize,
    pub entries_written: usize,
    pub skipped_types: SkippedTypes,
    /// Length of the rendered transcript in characters
    pub output_chars: usize,
}
