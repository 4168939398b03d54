use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{error::ExposedError, state::AppState};

/// Swap redacted error bodies for the unredacted ones when
/// `errors.expose_details` is enabled
pub async fn expose_error_details(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    if !state.config.errors.expose_details {
        return response;
    }

    let status = response.status();
    match response.extensions_mut().remove::<ExposedError>() {
        Some(ExposedError(body)) => (status, Json(body)).into_response(),
        None => response,
    }
}
