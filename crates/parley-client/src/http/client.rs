//! HTTP transport struct, request building, and response parsing.

use parley_common::SessionId;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{ExchangeError, ExchangeRequest, ExchangeResponse, Message, Reply, Role};

use super::config::{ReplyShape, WireFormat};

/// Longest slice of an error body kept in `ExchangeError::Status`.
pub(crate) const ERROR_BODY_LIMIT: usize = 200;

/// Exchange transport backed by `reqwest`.
///
/// No timeout is configured: a request runs until it completes or fails.
pub struct HttpTransport {
    pub(crate) url: String,
    pub(crate) wire: WireFormat,
    pub(crate) http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, wire: WireFormat) -> Self {
        Self {
            url: url.into(),
            wire,
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the JSON request body. The session field is omitted when no id is held.
    pub(crate) fn build_request_body(&self, request: &ExchangeRequest) -> Value {
        let mut body = Map::new();
        body.insert(
            self.wire.message_field.clone(),
            Value::String(request.message.clone()),
        );
        if let Some(ref id) = request.session_id {
            body.insert(
                self.wire.session_field.clone(),
                Value::String(id.as_str().to_string()),
            );
        }
        Value::Object(body)
    }

    /// Parse a 2xx response body.
    pub(crate) fn parse_response(&self, json: Value) -> Result<ExchangeResponse, ExchangeError> {
        if let Some(error) = json.get("error").and_then(Value::as_str) {
            return Err(ExchangeError::Backend(error.to_string()));
        }

        let session_id = json
            .get(&self.wire.session_field)
            .and_then(Value::as_str)
            .and_then(|raw| SessionId::parse(raw).ok());

        let reply = match self.wire.shape {
            ReplyShape::Reply => Reply::Text(self.reply_text(&json)?),
            ReplyShape::Transcript => Reply::Transcript(self.transcript(&json)?),
        };

        Ok(ExchangeResponse { session_id, reply })
    }

    fn reply_text(&self, json: &Value) -> Result<String, ExchangeError> {
        self.wire
            .reply_fields
            .iter()
            .find_map(|field| json.get(field).and_then(Value::as_str))
            .map(String::from)
            .ok_or_else(|| {
                ExchangeError::Parse(format!(
                    "no reply field in response (tried {})",
                    self.wire.reply_fields.join(", ")
                ))
            })
    }

    fn transcript(&self, json: &Value) -> Result<Vec<Message>, ExchangeError> {
        let items = json
            .get(&self.wire.transcript_field)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ExchangeError::Parse(format!(
                    "no '{}' array in response",
                    self.wire.transcript_field
                ))
            })?;

        let mut messages = Vec::with_capacity(items.len());
        for item in items {
            let role = match item["role"].as_str() {
                Some("user") => Role::User,
                Some("assistant") => Role::Assistant,
                other => {
                    debug!(role = ?other, "skipping transcript entry");
                    continue;
                }
            };
            let text = item["content"]
                .as_str()
                .or_else(|| item["text"].as_str())
                .unwrap_or_default();
            messages.push(Message {
                role,
                text: text.to_string(),
            });
        }
        Ok(messages)
    }
}
