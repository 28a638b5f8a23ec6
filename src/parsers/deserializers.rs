use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializer for fields where "present but null" differs from "absent"
///
/// Paired with `#[serde(default)]`: an absent key yields `None`, while any present
/// value, `null` included, yields `Some`.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
