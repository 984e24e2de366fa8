//! Where Parley keeps its files.
//!
//! The config file lives under the platform config directory unless
//! `PARLEY_CONFIG` points elsewhere. The session file lives under the
//! platform data directory.

use parley_common::ConfigError;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

pub(crate) const APP_NAME: &str = "parley";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "PARLEY_CONFIG";

const CONFIG_FILE: &str = "config.toml";
const SESSION_FILE: &str = "session.json";

/// Config file path: `$PARLEY_CONFIG` if set, else `<config dir>/parley/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_ENV), dirs::config_dir())
}

/// Session file used by the file store when `session.store_path` is unset.
pub fn default_session_path() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine data directory".into()))?;
    Ok(data_dir.join(APP_NAME).join(SESSION_FILE))
}

pub(crate) fn resolve_config_path(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        debug!("config path taken from {CONFIG_ENV}");
        return Ok(PathBuf::from(path));
    }
    let config_dir = config_dir
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Write the commented template to `path`.
///
/// An existing file is never overwritten, even one created between the
/// caller's existence check and this write.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(write_error(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_error)?;

    info!("created default config at {}", path.display());
    Ok(())
}
