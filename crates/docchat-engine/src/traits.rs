use async_trait::async_trait;
use crate::error::Result;
use crate::types::{DocumentMetadata, DocumentStatus, IngestSummary, Message, ThreadConfig, ThreadState};

/// Retrieval-augmented generation engine backing the chat service
///
/// Implementations own ingestion, indexing, retrieval, model calls and the
/// per-thread conversation checkpoints. Unknown thread ids are not errors:
/// they read as "no document" and an empty state.
#[async_trait]
pub trait RagEngine: Send + Sync {
    /// Extract and index a PDF for a thread
    async fn ingest(&self, bytes: Vec<u8>, thread_id: &str, filename: &str) -> Result<IngestSummary>;

    /// Run one chat turn and return the thread's resulting state
    async fn invoke_chat(&self, messages: Vec<Message>, config: &ThreadConfig) -> Result<ThreadState>;

    /// List every thread id the engine holds checkpoints for
    async fn list_thread_ids(&self) -> Result<Vec<String>>;

    /// Whether a document has been indexed for the thread
    async fn has_document(&self, thread_id: &str) -> Result<bool>;

    /// Metadata of the thread's indexed document, empty when there is none
    async fn document_metadata(&self, thread_id: &str) -> Result<DocumentMetadata>;

    /// Presence flag and metadata together
    ///
    /// Engines that can answer both from one lookup should override this so
    /// the pair cannot disagree.
    async fn document_status(&self, thread_id: &str) -> Result<DocumentStatus> {
        let has_document = self.has_document(thread_id).await?;
        let metadata = self.document_metadata(thread_id).await?;
        Ok(DocumentStatus {
            has_document,
            metadata,
        })
    }

    /// Current conversation state of a thread
    async fn get_state(&self, config: &ThreadConfig) -> Result<ThreadState>;
}
