use docchat_engine::{Content, Message, MessageKind};
use serde_json::json;

#[test]
fn test_message_human() {
    let msg = Message::human("Hello");
    assert_eq!(msg.type_tag(), Some("human"));
    assert_eq!(msg.text(), "Hello");
}

#[test]
fn test_message_ai() {
    let msg = Message::ai("Hi there!");
    assert!(msg.is_ai());
    assert_eq!(msg.type_tag(), Some("ai"));
}

#[test]
fn test_message_tool_result() {
    let msg = Message::tool_result("call_123", "rag_tool", "context");
    assert_eq!(msg.type_tag(), Some("tool"));
    assert_eq!(msg.name.as_deref(), Some("rag_tool"));
    assert_eq!(msg.tool_call_id.as_deref(), Some("call_123"));
}

#[test]
fn test_message_serialization_human() {
    let json = serde_json::to_value(Message::human("Hello")).unwrap();
    assert_eq!(json, json!({"type": "human", "content": "Hello"}));
}

#[test]
fn test_unknown_type_is_preserved() {
    let msg: Message = serde_json::from_value(json!({"type": "function", "content": "{}"})).unwrap();
    assert_eq!(msg.kind, Some(MessageKind::Other("function".to_string())));

    let back = serde_json::to_value(&msg).unwrap();
    assert_eq!(back["type"], "function");
}

#[test]
fn test_untyped_message_keeps_class() {
    let msg: Message = serde_json::from_value(json!({"class": "AIMessageChunk", "content": "partial"})).unwrap();
    assert_eq!(msg.kind, None);
    assert_eq!(msg.class_name.as_deref(), Some("AIMessageChunk"));
    assert!(!msg.is_ai());
}

#[test]
fn test_structured_content_text() {
    let msg: Message = serde_json::from_value(json!({
        "type": "ai",
        "content": [
            {"type": "text", "text": "Answer: "},
            {"type": "text", "text": "42"}
        ]
    }))
    .unwrap();

    assert_eq!(msg.text(), "Answer: 42");
    assert!(matches!(msg.content, Some(Content::Parts(_))));
}

#[test]
fn test_message_without_content() {
    let msg: Message = serde_json::from_value(json!({"type": "ai"})).unwrap();
    assert_eq!(msg.content, None);
    assert_eq!(msg.text(), "");
}
