//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Defaults target the `/adstod/start` chat backend and the
//! `/minnisblad-adstod/upload/` review backend on a local server.

mod endpoint;
mod exchange;
mod logging;
mod session;
mod upload;

pub use endpoint::*;
pub use exchange::*;
pub use logging::*;
pub use session::*;
pub use upload::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Parley.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    pub endpoint: EndpointConfig,
    pub exchange: ExchangeConfig,
    pub session: SessionConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

impl ParleyConfig {
    /// Full URL of the chat exchange endpoint.
    pub fn exchange_url(&self) -> String {
        self.endpoint.join(&self.exchange.path)
    }

    /// Full URL of the document upload endpoint.
    pub fn upload_url(&self) -> String {
        self.endpoint.join(&self.upload.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ParleyConfig = toml::from_str("").unwrap();
        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.exchange.path, "/adstod/start");
        assert_eq!(config.exchange.shape, ReplyShape::Reply);
        assert_eq!(config.session.storage_key, "thread_id");
        assert_eq!(config.upload.categories_field, "chapters");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn urls_join_without_double_slash() {
        let mut config = ParleyConfig::default();
        config.endpoint.base_url = "https://example.com/".into();
        assert_eq!(config.exchange_url(), "https://example.com/adstod/start");
        assert_eq!(
            config.upload_url(),
            "https://example.com/minnisblad-adstod/upload/"
        );
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: ParleyConfig = toml::from_str(
            r#"
[exchange]
session_field = "sessionId"
shape = "transcript"
"#,
        )
        .unwrap();
        assert_eq!(config.exchange.session_field, "sessionId");
        assert_eq!(config.exchange.shape, ReplyShape::Transcript);
        assert_eq!(config.exchange.message_field, "message");
        assert_eq!(config.exchange.transcript_field, "messages");
    }
}
