// Remote RAG engine client (HTTP/JSON)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::context::current_thread_id;
use crate::error::{EngineError, Result};
use crate::traits::RagEngine;
use crate::types::{
    ChatInput, DocumentMetadata, DocumentStatus, IngestSummary, Message, ThreadConfig, ThreadState,
};

/// Header carrying the request-scoped thread id to the engine
pub const THREAD_ID_HEADER: &str = "x-thread-id";

/// Client for a RAG engine running as a separate service
///
/// Every trait call maps to one HTTP request under `base_url`. Thread ids are
/// percent-encoded as single path segments.
pub struct HttpRagEngine {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpRagEngine {
    /// Create a client for the engine at `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Engine root, e.g. `http://localhost:8001/v1`
    /// * `api_key` - Optional bearer token sent on every request
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| EngineError::InvalidRequest(format!("Invalid engine URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(EngineError::InvalidRequest(format!(
                "Engine URL cannot be used as a base: {}",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| EngineError::InvalidRequest("Invalid API key format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Build `{base}/{segments...}`
    ///
    /// URL normalization would resolve `.` and `..` against the base, so
    /// dot-only segments are refused.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(EngineError::InvalidRequest(format!(
                "Path segment {:?} is not addressable",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| EngineError::InvalidRequest("Engine URL cannot be a base".to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http_client.request(method, url);
        match current_thread_id() {
            Some(thread_id) => builder.header(THREAD_ID_HEADER, thread_id),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        Self::handle_response(response).await
    }

    /// Decode a success body or turn the response into an [`EngineError`]
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        let message = read_error_message(response).await;
        tracing::error!(status = %status, message = %message, "RAG engine request failed");
        Err(EngineError::from_status(status.as_u16(), message))
    }

    /// Like [`Self::send`], but a 404 reads as the default value
    async fn send_or_default<T: DeserializeOwned + Default>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(T::default());
        }
        Self::handle_response(response).await
    }

}

/// `.` or `..`, which URL parsing resolves instead of sending
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Pull a human-readable message out of an error response
async fn read_error_message(response: Response) -> String {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return format!("HTTP {}", status),
    };

    if let Ok(value) = serde_json::from_str::<Value>(&body) {
        for key in ["detail", "error", "message"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }

    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body
    }
}

#[derive(Serialize)]
struct InvokeRequest<'a> {
    input: ChatInput,
    config: &'a ThreadConfig,
}

#[derive(Deserialize)]
struct ThreadList {
    #[serde(default)]
    threads: Vec<String>,
}

#[async_trait]
impl RagEngine for HttpRagEngine {
    async fn ingest(&self, bytes: Vec<u8>, thread_id: &str, filename: &str) -> Result<IngestSummary> {
        let url = self.endpoint(&["threads", thread_id, "documents"])?;
        tracing::debug!(thread_id = %thread_id, filename = %filename, bytes = bytes.len(), "Sending document to engine");

        let builder = self
            .request(Method::POST, url)
            .query(&[("filename", filename)])
            .header(CONTENT_TYPE, "application/pdf")
            .body(bytes);

        self.send(builder).await
    }

    async fn invoke_chat(&self, messages: Vec<Message>, config: &ThreadConfig) -> Result<ThreadState> {
        let url = self.endpoint(&["threads", config.thread_id(), "invoke"])?;
        let body = InvokeRequest {
            input: ChatInput { messages },
            config,
        };

        self.send(self.request(Method::POST, url).json(&body)).await
    }

    async fn list_thread_ids(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["threads"])?;
        let list: ThreadList = self.send(self.request(Method::GET, url)).await?;
        Ok(list.threads)
    }

    async fn has_document(&self, thread_id: &str) -> Result<bool> {
        Ok(self.document_status(thread_id).await?.has_document)
    }

    async fn document_metadata(&self, thread_id: &str) -> Result<DocumentMetadata> {
        Ok(self.document_status(thread_id).await?.metadata)
    }

    async fn document_status(&self, thread_id: &str) -> Result<DocumentStatus> {
        let url = self.endpoint(&["threads", thread_id, "document"])?;
        self.send_or_default(self.request(Method::GET, url)).await
    }

    async fn get_state(&self, config: &ThreadConfig) -> Result<ThreadState> {
        let url = self.endpoint(&["threads", config.thread_id(), "state"])?;
        self.send_or_default(self.request(Method::GET, url)).await
    }
}
