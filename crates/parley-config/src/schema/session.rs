use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Backing storage for the held session id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    Memory,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed key the session id is stored under.
    pub storage_key: String,
    pub store: StoreKind,
    /// Override for the file store location; defaults to the data dir.
    pub store_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "thread_id".into(),
            store: StoreKind::File,
            store_path: None,
        }
    }
}
