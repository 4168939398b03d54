use axum::{
    extract::{Path, State},
    Json,
};
use docchat_engine::ThreadConfig;
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
pub struct ThreadMessagesResponse {
    pub thread_id: String,
    pub messages: Vec<SerializedMessage>,
}

/// Current message history of a thread
#[utoipa::path(
    get,
    path = "/threads/{thread_id}/messages",
    params(
        ("thread_id" = String, Path, description = "Thread ID")
    ),
    responses(
        (status = 200, description = "Thread history, oldest first", body = ThreadMessagesResponse),
        (status = 400, description = "Invalid thread id", body = ErrorBody),
        (status = 500, description = "Engine failure", body = ErrorBody)
    ),
    tag = "messages"
)]
pub async fn get_thread_messages(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<ThreadMessagesResponse>> {
    check_thread_id(&thread_id)?;
    let thread_state = state
        .engine
        .get_state(&ThreadConfig::for_thread(&thread_id))
        .await?;

    Ok(Json(ThreadMessagesResponse {
        thread_id,
        messages: serialize_messages(&thread_state.messages),
    }))
}
