use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use docchat_engine::{context, Message, ThreadConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::{ApiResult, ErrorBody},
    ids::check_thread_id,
    serializer::{serialize_messages, SerializedMessage},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub thread_id: String,
    /// Text of the latest `ai` message, empty if there is none
    pub assistant: String,
    /// Full thread history after this turn
    pub messages: Vec<SerializedMessage>,
}

/// Run one chat turn against the thread's document
#[utoipa::path(
    post,
    path = "/threads/{thread_id}/chat",
    params(
        ("thread_id" = String, Path, description = "Thread ID")
    ),
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply and thread history", body = ChatResponse),
        (status = 400, description = "Invalid thread id or malformed body", body = ErrorBody),
        (status = 415, description = "Body is not JSON", body = ErrorBody),
        (status = 422, description = "Body does not match ChatRequest", body = ErrorBody),
        (status = 500, description = "Engine failure", body = ErrorBody),
        (status = 503, description = "Engine unreachable", body = ErrorBody)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    check_thread_id(&thread_id)?;
    let Json(req) = body?;
    let config = ThreadConfig::for_thread(&thread_id);
    tracing::info!(thread_id = %thread_id, chars = req.message.len(), "Chat turn");

    let final_state = context::with_thread(
        thread_id.clone(),
        state.engine.invoke_chat(vec![Message::human(req.message)], &config),
    )
    .await?;

    Ok(Json(ChatResponse {
        thread_id,
        assistant: final_state.assistant_reply(),
        messages: serialize_messages(&final_state.messages),
    }))
}
