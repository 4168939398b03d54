use docchat_engine::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Type reported for messages with neither a type tag nor an engine class
const FALLBACK_TYPE: &str = "Message";

/// Transport form of a conversation message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SerializedMessage {
    /// `human`, `ai`, `tool`, `system`, ...
    #[serde(rename = "type")]
    pub message_type: String,

    /// Usually a string, sometimes a list of structured parts
    #[schema(value_type = Object)]
    pub content: Value,

    /// Tool name for tool messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&Message> for SerializedMessage {
    fn from(message: &Message) -> Self {
        let message_type = message
            .type_tag()
            .or(message.class_name.as_deref())
            .unwrap_or(FALLBACK_TYPE)
            .to_string();

        let content = message
            .content
            .as_ref()
            .map(|c| c.to_value())
            .unwrap_or_else(|| Value::String(String::new()));

        let name = message.name.clone().filter(|n| !n.is_empty());

        Self {
            message_type,
            content,
            name,
        }
    }
}

pub fn serialize_messages(messages: &[Message]) -> Vec<SerializedMessage> {
    messages.iter().map(SerializedMessage::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(message: &Message) -> Value {
        serde_json::to_value(SerializedMessage::from(message)).unwrap()
    }

    #[test]
    fn test_human_message() {
        assert_eq!(
            to_json(&Message::human("What is chapter 2 about?")),
            json!({"type": "human", "content": "What is chapter 2 about?"})
        );
    }

    #[test]
    fn test_tool_message_keeps_name() {
        let message = Message::tool_result("call_1", "rag_tool", "retrieved chunk");
        assert_eq!(
            to_json(&message),
            json!({"type": "tool", "content": "retrieved chunk", "name": "rag_tool"})
        );
    }

    #[test]
    fn test_empty_name_is_dropped() {
        let message = Message::ai("hi").with_name("");
        assert_eq!(to_json(&message), json!({"type": "ai", "content": "hi"}));
    }

    #[test]
    fn test_missing_content_is_empty_string() {
        let message: Message = serde_json::from_value(json!({"type": "ai"})).unwrap();
        assert_eq!(to_json(&message)["content"], json!(""));
    }

    #[test]
    fn test_type_falls_back_to_class_name() {
        let message: Message =
            serde_json::from_value(json!({"class": "AIMessageChunk", "content": "x"})).unwrap();
        assert_eq!(to_json(&message)["type"], "AIMessageChunk");

        let bare: Message = serde_json::from_value(json!({"content": "x"})).unwrap();
        assert_eq!(to_json(&bare)["type"], "Message");
    }

    #[test]
    fn test_structured_content_passes_through() {
        let parts = json!([{"type": "text", "text": "a"}, {"type": "image_url", "image_url": "u"}]);
        let message: Message = serde_json::from_value(json!({"type": "ai", "content": parts})).unwrap();
        assert_eq!(to_json(&message)["content"], parts);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let message = Message::tool_result("call_9", "rag_tool", "page 4");
        assert_eq!(SerializedMessage::from(&message), SerializedMessage::from(&message));
    }
}
