use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::{ApiResult, ErrorBody},
    ids::{check_thread_id, new_thread_id},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateThreadResponse {
    pub thread_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListThreadsResponse {
    pub threads: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetadataResponse {
    pub thread_id: String,
    pub has_document: bool,
    /// Engine-defined description of the indexed PDF
    #[schema(value_type = Object)]
    pub metadata: Map<String, Value>,
}

/// Create a new thread
///
/// Only mints an id; the engine learns about the thread on its first chat
/// turn or upload.
#[utoipa::path(
    post,
    path = "/threads",
    responses(
        (status = 200, description = "Thread created", body = CreateThreadResponse)
    ),
    tag = "threads"
)]
pub async fn create_thread() -> Json<CreateThreadResponse> {
    let thread_id = new_thread_id();
    tracing::debug!(thread_id = %thread_id, "Created thread id");
    Json(CreateThreadResponse { thread_id })
}

/// List every thread the engine holds checkpoints for
#[utoipa::path(
    get,
    path = "/threads",
    responses(
        (status = 200, description = "Known thread ids", body = ListThreadsResponse),
        (status = 500, description = "Engine failure", body = ErrorBody),
        (status = 503, description = "Engine unreachable", body = ErrorBody)
    ),
    tag = "threads"
)]
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ListThreadsResponse>> {
    let threads = state.engine.list_thread_ids().await?;
    Ok(Json(ListThreadsResponse { threads }))
}

/// Document status of a thread
///
/// Unknown threads report `has_document: false` and empty metadata.
#[utoipa::path(
    get,
    path = "/threads/{thread_id}/metadata",
    params(
        ("thread_id" = String, Path, description = "Thread ID")
    ),
    responses(
        (status = 200, description = "Document status", body = MetadataResponse),
        (status = 400, description = "Invalid thread id", body = ErrorBody),
        (status = 503, description = "Engine unreachable", body = ErrorBody)
    ),
    tag = "threads"
)]
pub async fn get_thread_metadata(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<MetadataResponse>> {
    check_thread_id(&thread_id)?;
    let status = state.engine.document_status(&thread_id).await?;

    Ok(Json(MetadataResponse {
        thread_id,
        has_document: status.has_document,
        metadata: status.metadata,
    }))
}
