pub mod content;
pub mod message;
pub mod state;

pub use content::Content;
pub use message::{Message, MessageKind};
pub use state::{ThreadConfig, Configurable, ThreadState, ChatInput, DocumentMetadata, DocumentStatus, IngestSummary};
