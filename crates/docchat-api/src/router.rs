use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::CorsConfig,
    middleware::{errors, logging},
    openapi::ApiDoc,
    routes::{chat, documents, health, messages, threads},
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    let config = Arc::clone(&state.config);

    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Threads
        .route("/threads", post(threads::create_thread).get(threads::list_threads))
        .route("/threads/:thread_id/metadata", get(threads::get_thread_metadata))
        // Documents
        .route("/threads/:thread_id/pdf", post(documents::upload_pdf))
        // Chat
        .route("/threads/:thread_id/chat", post(chat::chat))
        // Messages
        .route("/threads/:thread_id/messages", get(messages::get_thread_messages));

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(state.clone(), errors::expose_error_details))
        .layer(middleware::from_fn(logging::log_request))
        .layer(DefaultBodyLimit::max(config.server.max_upload_bytes))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy
///
/// Browsers refuse `*` together with credentials, so a wildcard origin with
/// credentials mirrors the request's origin, method and headers instead.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        return CorsLayer::new();
    }

    let wildcard = config.origins.iter().any(|o| o == "*");
    let origin = if wildcard {
        if config.allow_credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::from(Any)
        }
    } else {
        let parsed_origins: Vec<HeaderValue> = config
            .origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed_origins)
    };

    let cors = CorsLayer::new().allow_origin(origin);

    if config.allow_credentials {
        cors.allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    } else {
        cors.allow_methods(Any).allow_headers(Any)
    }
}
