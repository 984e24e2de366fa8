use std::path::PathBuf;

use super::UploadError;

/// What the user filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub file: PathBuf,
    pub token: String,
    pub categories: Vec<String>,
}

impl UploadForm {
    pub fn new(file: impl Into<PathBuf>, token: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            token: token.into(),
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Local checks run before anything is sent.
    pub fn validate(&self) -> Result<(), UploadError> {
        if !self.file.is_file() {
            return Err(UploadError::Validation(
                "Please select a file to upload.".into(),
            ));
        }
        if self.token.trim().is_empty() {
            return Err(UploadError::Validation("Please enter your token.".into()));
        }
        Ok(())
    }

    /// Categories as the JSON array string the backend expects.
    pub(crate) fn categories_json(&self) -> String {
        serde_json::to_string(&self.categories).unwrap_or_else(|_| "[]".to_string())
    }

    pub(crate) fn file_name(&self) -> String {
        self.file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }

    pub(crate) fn mime(&self) -> &'static str {
        match self.file.extension().and_then(|e| e.to_str()) {
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("pdf") => "application/pdf",
            Some("txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }
}
