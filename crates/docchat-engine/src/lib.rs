pub mod types;
pub mod traits;
pub mod context;
pub mod error;
pub mod http;

pub use traits::RagEngine;
pub use error::{EngineError, Result};
pub use http::HttpRagEngine;
pub use types::{
    Content, Message, MessageKind,
    ThreadConfig, ThreadState, DocumentMetadata, DocumentStatus, IngestSummary,
};
