use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("RAG engine unavailable: {0}")]
    Unavailable(String),

    #[error("RAG engine rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("RAG engine failed ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid engine response: {0}")]
    Decode(String),

    #[error("Invalid engine request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Classify a non-success engine response
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if (400..500).contains(&status) {
            Self::Rejected { status, message }
        } else {
            Self::Upstream { status, message }
        }
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() || e.is_request() {
            Self::Unavailable(e.to_string())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if e.is_builder() {
            Self::InvalidRequest(e.to_string())
        } else if let Some(status) = e.status() {
            Self::from_status(status.as_u16(), e.to_string())
        } else {
            Self::Unavailable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
