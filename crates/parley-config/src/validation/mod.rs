//! Full configuration validation.
//!
//! Each check pushes a message onto a shared list; the orchestrator
//! collects them into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ParleyConfig;
use parley_common::ConfigError;

use helpers::{validate_base_url, validate_name, validate_path};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_base_url(&mut errors, "endpoint.base_url", &config.endpoint.base_url);

    validate_path(&mut errors, "exchange.path", &config.exchange.path);
    validate_name(&mut errors, "exchange.message_field", &config.exchange.message_field);
    validate_name(&mut errors, "exchange.session_field", &config.exchange.session_field);
    validate_name(
        &mut errors,
        "exchange.transcript_field",
        &config.exchange.transcript_field,
    );
    if config.exchange.reply_fields.is_empty() {
        errors.push("exchange.reply_fields must list at least one field".into());
    }
    for field in &config.exchange.reply_fields {
        validate_name(&mut errors, "exchange.reply_fields[]", field);
    }

    validate_name(&mut errors, "session.storage_key", &config.session.storage_key);

    validate_path(&mut errors, "upload.path", &config.upload.path);
    validate_name(&mut errors, "upload.file_field", &config.upload.file_field);
    validate_name(
        &mut errors,
        "upload.categories_field",
        &config.upload.categories_field,
    );
    validate_name(
        &mut errors,
        "upload.fallback_filename",
        &config.upload.fallback_filename,
    );

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
