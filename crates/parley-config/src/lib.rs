//! Parley configuration system.
//!
//! TOML-based configuration for the backend endpoint, the exchange wire
//! contract, session storage, document uploads and logging. Every section
//! uses serde defaults so a partial (or empty) file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parley_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("chat endpoint: {}", config.exchange_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    EndpointConfig, ExchangeConfig, LoggingConfig, ParleyConfig, ReplyShape, SessionConfig,
    StoreKind, UploadConfig, CONFIG_SCHEMA_VERSION,
};

use parley_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path.
///
/// The default path gets a commented template written on first use. An
/// explicit path must exist. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
