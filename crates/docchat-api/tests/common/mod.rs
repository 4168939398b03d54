#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use docchat_api::{build_router, config::Config, AppState};
use docchat_engine::context::current_thread_id;
use docchat_engine::{
    DocumentMetadata, EngineError, IngestSummary, Message, RagEngine, Result, ThreadConfig, ThreadState,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BOUNDARY: &str = "docchat-test-boundary";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    Upstream,
    Unavailable,
    Rejected,
}

impl Failure {
    fn to_error(self) -> EngineError {
        match self {
            Failure::Upstream => EngineError::Upstream {
                status: 500,
                message: "vector store corrupted".to_string(),
            },
            Failure::Unavailable => EngineError::Unavailable("connection refused".to_string()),
            Failure::Rejected => EngineError::Rejected {
                status: 422,
                message: "PDF has no extractable text".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestCall {
    pub thread_id: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// In-memory engine double that records what the gateway asked of it
#[derive(Default)]
pub struct StubEngine {
    pub failure: Option<Failure>,
    pub documents: Mutex<HashMap<String, DocumentMetadata>>,
    pub history: Mutex<HashMap<String, Vec<Message>>>,
    pub ingest_calls: Mutex<Vec<IngestCall>>,
    /// `(config thread id, request-scoped thread id)` per chat call
    pub chat_contexts: Mutex<Vec<(String, Option<String>)>>,
}

impl StubEngine {
    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        match self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RagEngine for StubEngine {
    async fn ingest(&self, bytes: Vec<u8>, thread_id: &str, filename: &str) -> Result<IngestSummary> {
        self.check()?;
        self.ingest_calls.lock().unwrap().push(IngestCall {
            thread_id: thread_id.to_string(),
            filename: filename.to_string(),
            bytes: bytes.clone(),
        });

        let mut metadata = DocumentMetadata::new();
        metadata.insert("filename".to_string(), json!(filename));
        metadata.insert("bytes".to_string(), json!(bytes.len()));
        self.documents
            .lock()
            .unwrap()
            .insert(thread_id.to_string(), metadata);

        Ok(json!({"filename": filename, "documents": 1, "chunks": 4}))
    }

    async fn invoke_chat(&self, messages: Vec<Message>, config: &ThreadConfig) -> Result<ThreadState> {
        self.chat_contexts
            .lock()
            .unwrap()
            .push((config.thread_id().to_string(), current_thread_id()));
        tokio::task::yield_now().await;
        self.check()?;

        let question = messages.last().map(Message::text).unwrap_or_default();
        let mut history = self.history.lock().unwrap();
        let thread = history.entry(config.thread_id().to_string()).or_default();
        thread.extend(messages);
        thread.push(Message::tool_result("call_1", "rag_tool", "retrieved context"));
        thread.push(Message::ai(format!("Answer to: {}", question)));

        Ok(ThreadState {
            messages: thread.clone(),
        })
    }

    async fn list_thread_ids(&self) -> Result<Vec<String>> {
        self.check()?;
        let mut ids: Vec<String> = self.history.lock().unwrap().keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    async fn has_document(&self, thread_id: &str) -> Result<bool> {
        self.check()?;
        Ok(self.documents.lock().unwrap().contains_key(thread_id))
    }

    async fn document_metadata(&self, thread_id: &str) -> Result<DocumentMetadata> {
        self.check()?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .get(thread_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_state(&self, config: &ThreadConfig) -> Result<ThreadState> {
        self.check()?;
        let messages = self
            .history
            .lock()
            .unwrap()
            .get(config.thread_id())
            .cloned()
            .unwrap_or_default();
        Ok(ThreadState { messages })
    }
}

pub fn app_with(engine: Arc<StubEngine>, config: Config) -> Router {
    build_router(Arc::new(AppState::new(config, engine)))
}

pub fn app(engine: Arc<StubEngine>) -> Router {
    app_with(engine, Config::default())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn post_upload(uri: &str, field: &str, filename: &str, content: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field, filename, content)))
        .unwrap()
}

/// Test helper to extract JSON response
pub async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
