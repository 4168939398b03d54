use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::routes::{chat, documents, health, messages, threads};
use crate::serializer::SerializedMessage;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docchat API",
        description = "Conversational question answering over uploaded PDFs"
    ),
    paths(
        health::health_check,
        threads::create_thread,
        threads::list_threads,
        threads::get_thread_metadata,
        documents::upload_pdf,
        chat::chat,
        messages::get_thread_messages,
    ),
    components(schemas(
        health::HealthResponse,
        threads::CreateThreadResponse,
        threads::ListThreadsResponse,
        threads::MetadataResponse,
        documents::UploadResponse,
        documents::UploadForm,
        chat::ChatRequest,
        chat::ChatResponse,
        messages::ThreadMessagesResponse,
        SerializedMessage,
        ErrorBody,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "threads", description = "Conversation threads"),
        (name = "documents", description = "PDF ingestion"),
        (name = "chat", description = "Chat turns"),
        (name = "messages", description = "Thread history"),
    )
)]
pub struct ApiDoc;
