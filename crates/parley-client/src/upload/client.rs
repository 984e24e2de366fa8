//! Upload client: multipart request, busy guard, response dispatch.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::document::filename_from_disposition;
use super::form::UploadForm;
use super::review::Review;
use super::{UploadError, UploadOutcome};

/// Endpoint and field names for the upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    pub url: String,
    pub file_field: String,
    pub categories_field: String,
    pub fallback_filename: String,
}

impl UploadSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_field: "file".to_string(),
            categories_field: "chapters".to_string(),
            fallback_filename: "document.docx".to_string(),
        }
    }
}

/// Clears the `busy` flag on drop, so the client is ready again after any
/// outcome, including a cancelled future.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, UploadError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(UploadError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Sends documents to the review endpoint, one at a time.
pub struct DocumentUploadClient {
    settings: UploadSettings,
    http: reqwest::Client,
    busy: AtomicBool,
}

impl DocumentUploadClient {
    pub fn new(settings: UploadSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// Whether an upload is currently running.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Validate the form, upload it, and interpret the answer.
    pub async fn upload(&self, form: &UploadForm) -> Result<UploadOutcome, UploadError> {
        form.validate()?;
        let _guard = BusyGuard::acquire(&self.busy)?;

        let bytes = tokio::fs::read(&form.file).await?;
        debug!(
            url = %self.settings.url,
            size = bytes.len(),
            categories = form.categories.len(),
            "upload request"
        );

        let file_part = reqwest::multipart::Part::bytes(bytes)
            .file_name(form.file_name())
            .mime_str(form.mime())
            .map_err(|e| UploadError::Parse(e.to_string()))?;

        let multipart = reqwest::multipart::Form::new()
            .part(self.settings.file_field.clone(), file_part)
            .text(self.settings.categories_field.clone(), form.categories_json());

        let response = self
            .http
            .post(&self.settings.url)
            .header("Authorization", format!("Bearer {}", form.token.trim()))
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(UploadError::Backend {
                status: status.as_u16(),
                detail: error_detail(&text),
            });
        }

        let header = |name: reqwest::header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        let content_type = header(reqwest::header::CONTENT_TYPE).unwrap_or_default();
        let disposition = header(reqwest::header::CONTENT_DISPOSITION);

        if content_type.starts_with("application/json") {
            let json: serde_json::Value = response
                .json()
                .await
                .map_err(|e| UploadError::Parse(e.to_string()))?;
            return Ok(UploadOutcome::Review(Review::from_json(json)?));
        }

        let filename = disposition
            .as_deref()
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| self.settings.fallback_filename.clone());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        Ok(UploadOutcome::Document {
            filename,
            bytes: bytes.to_vec(),
        })
    }
}

/// Pull `detail` out of a FastAPI-style error body, else return the raw text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| match json.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.trim().to_string())
}
