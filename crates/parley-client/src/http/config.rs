//! Wire contract for the exchange endpoint.

/// Whether the backend answers with one reply or the whole transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    Reply,
    Transcript,
}

/// Field names used on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireFormat {
    pub message_field: String,
    pub session_field: String,
    /// Tried in order; the first string value is the reply.
    pub reply_fields: Vec<String>,
    pub shape: ReplyShape,
    pub transcript_field: String,
}

impl Default for WireFormat {
    fn default() -> Self {
        Self {
            message_field: "message".to_string(),
            session_field: "thread_id".to_string(),
            reply_fields: vec!["message".to_string(), "content".to_string()],
            shape: ReplyShape::Reply,
            transcript_field: "messages".to_string(),
        }
    }
}

impl WireFormat {
    pub fn with_session_field(mut self, field: impl Into<String>) -> Self {
        self.session_field = field.into();
        self
    }

    pub fn with_shape(mut self, shape: ReplyShape) -> Self {
        self.shape = shape;
        self
    }
}
