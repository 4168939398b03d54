use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    ids::check_thread_id,
    state::AppState,
};

/// Multipart field carrying the PDF
pub const FILE_FIELD: &str = "file";

const NOT_A_PDF: &str = "Please upload a .pdf file";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub thread_id: String,
    pub indexed: bool,
    /// Engine-defined ingestion summary
    #[schema(value_type = Object)]
    pub summary: Value,
}

/// Multipart form accepted by the upload endpoint
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

pub fn is_pdf_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

/// Upload and index a PDF for a thread
#[utoipa::path(
    post,
    path = "/threads/{thread_id}/pdf",
    params(
        ("thread_id" = String, Path, description = "Thread ID")
    ),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document indexed", body = UploadResponse),
        (status = 400, description = "Missing file, not a .pdf, or invalid thread id", body = ErrorBody),
        (status = 413, description = "Upload too large", body = ErrorBody),
        (status = 422, description = "Engine could not index the document", body = ErrorBody),
        (status = 500, description = "Ingestion failed", body = ErrorBody)
    ),
    tag = "documents"
)]
pub async fn upload_pdf(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    check_thread_id(&thread_id)?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !is_pdf_filename(&filename) {
            return Err(ApiError::BadRequest(NOT_A_PDF.to_string()));
        }

        let bytes = field.bytes().await?;
        tracing::info!(
            thread_id = %thread_id,
            filename = %filename,
            bytes = bytes.len(),
            "Indexing PDF"
        );

        let summary = state
            .engine
            .ingest(bytes.to_vec(), &thread_id, &filename)
            .await
            .map_err(ApiError::Ingestion)?;

        return Ok(Json(UploadResponse {
            thread_id,
            indexed: true,
            summary,
        }));
    }

    Err(ApiError::BadRequest(format!("Missing '{}' field in upload", FILE_FIELD)))
}
