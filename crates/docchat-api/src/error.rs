use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docchat_engine::EngineError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Document ingestion failed: {0}")]
    Ingestion(#[source] EngineError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Error body returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Ingestion(e) | ApiError::Engine(e) => engine_status(e),
            ApiError::Upload(e) => e.status(),
            ApiError::InvalidBody(e) => e.status(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Ingestion(_) => "ingestion_failed",
            ApiError::Engine(_) => "engine_error",
            ApiError::Upload(_) => "invalid_upload",
            ApiError::InvalidBody(_) => "invalid_body",
        }
    }

    /// Client-facing message; raw engine text only when `expose_details` is set
    pub fn detail(&self, expose_details: bool) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Ingestion(e) | ApiError::Engine(e) if expose_details => engine_detail(e),
            ApiError::Ingestion(e) => match e {
                EngineError::Rejected { .. } => "The document could not be indexed".to_string(),
                EngineError::Unavailable(_) => "Document service is unavailable".to_string(),
                _ => "Failed to index document".to_string(),
            },
            ApiError::Engine(e) => match e {
                EngineError::Rejected { .. } => "The request was rejected by the engine".to_string(),
                EngineError::Unavailable(_) => "Chat service is unavailable".to_string(),
                _ => "Processing error".to_string(),
            },
            ApiError::Upload(e) => e.body_text(),
            ApiError::InvalidBody(e) => e.body_text(),
        }
    }
}

fn engine_status(e: &EngineError) -> StatusCode {
    match e {
        EngineError::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The engine's own message, without our wrapping prefix
fn engine_detail(e: &EngineError) -> String {
    match e {
        EngineError::Rejected { message, .. } | EngineError::Upstream { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// Unredacted error body, attached to error responses as an extension.
/// `middleware::errors::expose_error_details` swaps it in when configured.
#[derive(Debug, Clone)]
pub struct ExposedError(pub ErrorBody);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        } else {
            tracing::warn!(code = self.code(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            detail: self.detail(false),
            code: self.code().to_string(),
        };
        let exposed = ErrorBody {
            detail: self.detail(true),
            code: self.code().to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ExposedError(exposed));
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
