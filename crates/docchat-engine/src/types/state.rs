use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use super::message::Message;

/// Opaque description of an indexed PDF, shaped by the engine
pub type DocumentMetadata = Map<String, Value>;

/// Opaque result of an ingestion call, shaped by the engine
pub type IngestSummary = Value;

/// Per-call engine configuration, keyed by thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadConfig {
    pub configurable: Configurable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configurable {
    pub thread_id: String,
}

impl ThreadConfig {
    pub fn for_thread(thread_id: impl Into<String>) -> Self {
        Self {
            configurable: Configurable {
                thread_id: thread_id.into(),
            },
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.configurable.thread_id
    }
}

/// Snapshot of a thread's conversation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadState {
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl ThreadState {
    /// Most recent assistant reply, empty when the state holds none
    pub fn assistant_reply(&self) -> String {
        self.messages
            .iter()
            .rev()
            .find(|m| m.is_ai())
            .map(Message::text)
            .unwrap_or_default()
    }
}

/// Input to one chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    pub messages: Vec<Message>,
}

/// Document presence for a thread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatus {
    #[serde(default)]
    pub has_document: bool,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}
