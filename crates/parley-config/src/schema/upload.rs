use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Document upload endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub path: String,
    /// Multipart field name for the document.
    pub file_field: String,
    /// Multipart field name for the JSON-encoded category list.
    pub categories_field: String,
    /// Where downloaded documents are written.
    pub output_dir: PathBuf,
    /// Used when the server sends no usable Content-Disposition filename.
    pub fallback_filename: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            path: "/minnisblad-adstod/upload/".into(),
            file_field: "file".into(),
            categories_field: "chapters".into(),
            output_dir: PathBuf::from("."),
            fallback_filename: "document.docx".into(),
        }
    }
}
