use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message content as the engine reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Simple text content
    Text(String),

    /// Structured parts: bare strings, `{"type": "text", "text": ...}`, tool payloads.
    /// Parts are kept as raw JSON so unknown part types survive a round trip.
    Parts(Vec<Value>),
}

impl Content {
    /// Create text content
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Flatten to a string, concatenating every text part
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Parts(parts) => parts.iter().filter_map(text_of).collect(),
        }
    }

    /// JSON form used on the wire towards clients
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Parts(parts) => Value::Array(parts.clone()),
        }
    }
}

fn text_of(part: &Value) -> Option<&str> {
    if let Value::String(s) = part {
        return Some(s);
    }
    if part.get("type").and_then(Value::as_str) != Some("text") {
        return None;
    }
    part.get("text").and_then(Value::as_str)
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
