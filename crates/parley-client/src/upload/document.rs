//! Downloaded documents: Content-Disposition parsing and saving.

use std::path::{Path, PathBuf};

use tracing::info;

use super::UploadError;

/// Extract a filename from a Content-Disposition header value.
///
/// Prefers the RFC 5987 `filename*=UTF-8''…` form, falling back to
/// `filename="…"`. Returns `None` for missing or unsafe names.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let params: Vec<(&str, &str)> = header
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect();

    let extended = params
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("filename*"))
        .and_then(|(_, v)| {
            let (_charset_and_lang, encoded) = v.split_once("''")?;
            urlencoding::decode(encoded.trim_matches('"'))
                .ok()
                .map(|s| s.into_owned())
        });

    let plain = || {
        params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("filename"))
            .map(|(_, v)| v.trim_matches('"').to_string())
    };

    extended.or_else(plain).filter(|name| is_safe_filename(name))
}

fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

/// Write a downloaded document into `dir`, returning its path.
pub fn save_document(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, UploadError> {
    if !is_safe_filename(filename) {
        return Err(UploadError::Validation(format!(
            "refusing to save document as {filename:?}"
        )));
    }
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), size = bytes.len(), "document saved");
    Ok(path)
}
