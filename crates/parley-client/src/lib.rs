//! Client side of a Parley conversation.
//!
//! Provides:
//! - `ConversationSessionClient`: one chat session with optimistic local echo
//! - `SessionStore` implementations holding the backend-issued session id
//! - `HttpTransport`, the JSON exchange over `reqwest`
//! - `DocumentUploadClient` for the document review endpoint

pub mod http;
pub mod session;
pub mod store;
pub mod transcript;
pub mod upload;
pub mod view;

use async_trait::async_trait;
use parley_common::SessionId;

pub use http::{HttpTransport, WireFormat};
pub use session::{ConversationSessionClient, Submission, ERROR_TEXT};
pub use store::{FileStore, MemoryStore, SessionStore, StoreError};
pub use transcript::{Entry, Transcript};
pub use upload::{DocumentUploadClient, Review, UploadError, UploadForm, UploadOutcome, UploadSettings};
pub use view::TranscriptView;

/// Sends one user message to the backend and returns its answer.
///
/// Each call is independent from the transport's point of view; continuity
/// comes only from the session id carried in the request.
#[async_trait]
pub trait ExchangeTransport: Send + Sync {
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeResponse, ExchangeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub message: String,
    pub session_id: Option<SessionId>,
}

impl ExchangeRequest {
    /// Build a request from raw input. Returns `None` when the trimmed text is empty.
    pub fn new(text: &str, session_id: Option<SessionId>) -> Option<Self> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }
        Some(Self {
            message: message.to_string(),
            session_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeResponse {
    pub session_id: Option<SessionId>,
    pub reply: Reply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// One assistant message to append.
    Text(String),
    /// The backend's full transcript, replacing the local one.
    Transcript(Vec<Message>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_input() {
        let req = ExchangeRequest::new("  hello \n", None).unwrap();
        assert_eq!(req.message, "hello");
        assert!(req.session_id.is_none());
    }

    #[test]
    fn request_rejects_blank_input() {
        assert!(ExchangeRequest::new("", None).is_none());
        assert!(ExchangeRequest::new(" \t\n ", None).is_none());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","text":"hi"}"#);
    }

    #[test]
    fn exchange_error_display() {
        let err = ExchangeError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(
            ExchangeError::Network("refused".into()).to_string(),
            "network error: refused"
        );
    }
}
