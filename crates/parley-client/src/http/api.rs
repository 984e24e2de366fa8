//! ExchangeTransport implementation for HttpTransport.

use async_trait::async_trait;
use tracing::debug;

use crate::{ExchangeError, ExchangeRequest, ExchangeResponse, ExchangeTransport};

use super::client::{HttpTransport, ERROR_BODY_LIMIT};

#[async_trait]
impl ExchangeTransport for HttpTransport {
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeResponse, ExchangeError> {
        let body = self.build_request_body(request);

        debug!(
            url = %self.url,
            has_session = request.session_id.is_some(),
            "exchange request"
        );

        let response = self
            .http
            .post(&self.url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(ERROR_BODY_LIMIT).collect::<String>();
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ExchangeError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
