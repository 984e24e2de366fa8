//! `parley upload`: send a document for review and show or save the result.

use std::io::Write;
use std::path::PathBuf;

use parley_client::upload::save_document;
use parley_client::{DocumentUploadClient, Review, UploadError, UploadForm, UploadOutcome};
use tracing::info;

/// Environment variable consulted when `--token` is not given.
pub const TOKEN_ENV: &str = "PARLEY_TOKEN";

pub struct UploadRequest {
    pub file: PathBuf,
    pub token: Option<String>,
    pub categories: Vec<String>,
    pub output_dir: PathBuf,
}

impl UploadRequest {
    fn form(&self) -> UploadForm {
        let token = self
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .unwrap_or_default();
        UploadForm::new(&self.file, token).with_categories(self.categories.clone())
    }
}

/// Upload, then print a review or save the returned document.
pub async fn run(
    client: &DocumentUploadClient,
    request: &UploadRequest,
    out: &mut impl Write,
) -> Result<(), UploadError> {
    let form = request.form();
    info!(file = %form.file.display(), "uploading document");

    match client.upload(&form).await? {
        UploadOutcome::Review(review) => print_review(&review, out)?,
        UploadOutcome::Document { filename, bytes } => {
            let path = save_document(&request.output_dir, &filename, &bytes)?;
            writeln!(out, "saved {}", path.display())?;
        }
    }
    Ok(())
}

fn print_review(review: &Review, out: &mut impl Write) -> std::io::Result<()> {
    if review.is_empty() {
        return writeln!(out, "(empty review)");
    }
    let sections = if review.properties.is_empty() {
        &review.fields
    } else {
        &review.properties
    };
    for (name, text) in sections {
        writeln!(out, "== {name} ==")?;
        writeln!(out, "{text}")?;
        writeln!(out)?;
    }
    Ok(())
}
