//! Turn the loaded config into client-side building blocks.

use parley_client::http::ReplyShape as WireShape;
use parley_client::{FileStore, MemoryStore, SessionStore, UploadSettings, WireFormat};
use parley_common::ParleyError;
use parley_config::toml_loader::default_session_path;
use parley_config::{ParleyConfig, ReplyShape, StoreKind};

pub fn wire_format(config: &ParleyConfig) -> WireFormat {
    let exchange = &config.exchange;
    WireFormat {
        message_field: exchange.message_field.clone(),
        session_field: exchange.session_field.clone(),
        reply_fields: exchange.reply_fields.clone(),
        shape: match exchange.shape {
            ReplyShape::Reply => WireShape::Reply,
            ReplyShape::Transcript => WireShape::Transcript,
        },
        transcript_field: exchange.transcript_field.clone(),
    }
}

pub fn upload_settings(config: &ParleyConfig) -> UploadSettings {
    UploadSettings {
        url: config.upload_url(),
        file_field: config.upload.file_field.clone(),
        categories_field: config.upload.categories_field.clone(),
        fallback_filename: config.upload.fallback_filename.clone(),
    }
}

pub fn session_store(config: &ParleyConfig) -> Result<Box<dyn SessionStore>, ParleyError> {
    match config.session.store {
        StoreKind::Memory => Ok(Box::new(MemoryStore::new())),
        StoreKind::File => {
            let path = match config.session.store_path {
                Some(ref path) => path.clone(),
                None => default_session_path()?,
            };
            Ok(Box::new(FileStore::new(path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_mirrors_exchange_section() {
        let mut config = ParleyConfig::default();
        config.exchange.session_field = "sessionId".into();
        config.exchange.shape = ReplyShape::Transcript;

        let wire = wire_format(&config);
        assert_eq!(wire.session_field, "sessionId");
        assert_eq!(wire.shape, WireShape::Transcript);
        assert_eq!(wire.message_field, "message");
    }

    #[test]
    fn upload_settings_use_full_url() {
        let mut config = ParleyConfig::default();
        config.endpoint.base_url = "https://example.is".into();
        let settings = upload_settings(&config);
        assert_eq!(settings.url, "https://example.is/minnisblad-adstod/upload/");
        assert_eq!(settings.categories_field, "chapters");
    }

    #[test]
    fn file_store_honours_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        let mut config = ParleyConfig::default();
        config.session.store_path = Some(path.clone());

        let store = session_store(&config).unwrap();
        store.set("thread_id", "abc").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn memory_store_touches_no_files() {
        let mut config = ParleyConfig::default();
        config.session.store = StoreKind::Memory;
        let store = session_store(&config).unwrap();
        store.set("thread_id", "abc").unwrap();
        assert_eq!(store.get("thread_id").unwrap().as_deref(), Some("abc"));
    }
}
