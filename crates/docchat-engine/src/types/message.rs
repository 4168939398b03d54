use serde::{Deserialize, Serialize};
use super::content::Content;

/// Message type tag as reported by the engine
///
/// The engine speaks LangChain-style tags (`human`, `ai`, `system`, `tool`).
/// Anything else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    Human,
    Ai,
    System,
    Tool,
    Other(String),
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Human => "human",
            Self::Ai => "ai",
            Self::System => "system",
            Self::Tool => "tool",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for MessageKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "human" => Self::Human,
            "ai" => Self::Ai,
            "system" => Self::System,
            "tool" => Self::Tool,
            _ => Self::Other(tag),
        }
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// A single conversation message owned by the engine's thread state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Explicit type tag; older engine builds omit it
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Tool name for tool-originated messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// Engine-side class of the message (e.g. `AIMessageChunk`)
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Message {
    fn with_kind(kind: MessageKind, content: Content) -> Self {
        Self {
            kind: Some(kind),
            content: Some(content),
            name: None,
            tool_call_id: None,
            class_name: None,
        }
    }

    /// Create human message
    pub fn human(content: impl Into<Content>) -> Self {
        Self::with_kind(MessageKind::Human, content.into())
    }

    /// Create AI message with text
    pub fn ai(content: impl Into<Content>) -> Self {
        Self::with_kind(MessageKind::Ai, content.into())
    }

    /// Create system message
    pub fn system(content: impl Into<Content>) -> Self {
        Self::with_kind(MessageKind::System, content.into())
    }

    /// Create tool result message
    pub fn tool_result(
        tool_call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<Content>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            tool_call_id: Some(tool_call_id.into()),
            ..Self::with_kind(MessageKind::Tool, content.into())
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Type tag as a string, if the message carries one
    pub fn type_tag(&self) -> Option<&str> {
        self.kind.as_ref().map(MessageKind::as_str)
    }

    pub fn is_ai(&self) -> bool {
        self.kind == Some(MessageKind::Ai)
    }

    /// Text of the message, empty when there is no content
    pub fn text(&self) -> String {
        self.content.as_ref().map(Content::to_text).unwrap_or_default()
    }
}
