//! Wire contract of the chat exchange endpoint.
//!
//! Backends disagree on field names (`thread_id` vs `sessionId`) and on
//! whether a reply is one message or the whole transcript, so all of it
//! is configurable.

use serde::{Deserialize, Serialize};

/// What a successful exchange returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyShape {
    /// A single assistant reply appended to the transcript.
    Reply,
    /// The full transcript, replacing the local one.
    Transcript,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    pub path: String,
    /// Request field carrying the user's text.
    pub message_field: String,
    /// Request and response field carrying the session id.
    pub session_field: String,
    /// Response fields tried in order for the reply text.
    pub reply_fields: Vec<String>,
    pub shape: ReplyShape,
    /// Response field holding `[{role, content}]` when `shape = "transcript"`.
    pub transcript_field: String,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            path: "/adstod/start".into(),
            message_field: "message".into(),
            session_field: "thread_id".into(),
            reply_fields: vec!["message".into(), "content".into()],
            shape: ReplyShape::Reply,
            transcript_field: "messages".into(),
        }
    }
}
