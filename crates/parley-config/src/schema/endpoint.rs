use serde::{Deserialize, Serialize};

/// Where the backend lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Scheme, host and optional port of the backend, e.g. `https://example.com`.
    pub base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
        }
    }
}

impl EndpointConfig {
    /// Append an absolute path to the base URL.
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
