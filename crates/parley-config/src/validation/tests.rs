use super::*;
use crate::schema::ParleyConfig;

#[test]
fn default_config_is_valid() {
    assert!(validate(&ParleyConfig::default()).is_ok());
}

#[test]
fn https_base_url_is_valid() {
    let mut config = ParleyConfig::default();
    config.endpoint.base_url = "https://chat.example.is/".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn base_url_without_scheme_is_rejected() {
    let mut config = ParleyConfig::default();
    config.endpoint.base_url = "example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.base_url"));
    assert!(err.contains("http://"));
}

#[test]
fn base_url_without_host_is_rejected() {
    let mut config = ParleyConfig::default();
    config.endpoint.base_url = "https://".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("has no host"));
}

#[test]
fn relative_paths_are_rejected() {
    let mut config = ParleyConfig::default();
    config.exchange.path = "adstod/start".into();
    config.upload.path = "upload".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("exchange.path"));
    assert!(err.contains("upload.path"));
}

#[test]
fn blank_field_names_are_rejected() {
    let mut config = ParleyConfig::default();
    config.exchange.session_field = " ".into();
    config.session.storage_key = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("exchange.session_field must not be empty"));
    assert!(err.contains("session.storage_key must not be empty"));
}

#[test]
fn empty_reply_fields_are_rejected() {
    let mut config = ParleyConfig::default();
    config.exchange.reply_fields.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("exchange.reply_fields"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut config = ParleyConfig::default();
    config.logging.level = "DEBUG".into();
    assert!(validate(&config).is_ok());

    config.logging.level = "verbose".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = ParleyConfig::default();
    config.endpoint.base_url = "nope".into();
    config.upload.file_field = String::new();
    config.logging.level = "loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("; ").count(), 2);
}
