//! Document upload to the review backend.
//!
//! Posts a document, a bearer token and the selected categories as a
//! multipart form. The backend answers either with a JSON review or with a
//! generated document to download.

mod client;
mod document;
mod form;
mod review;


pub use client::{DocumentUploadClient, UploadSettings};
pub use document::{filename_from_disposition, save_document};
pub use form::UploadForm;
pub use review::{unescape_review_text, Review};

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Review(Review),
    Document { filename: String, bytes: Vec<u8> },
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Input rejected locally; nothing was sent.
    #[error("{0}")]
    Validation(String),
    #[error("an upload is already in progress")]
    Busy,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {detail}")]
    Backend { status: u16, detail: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
