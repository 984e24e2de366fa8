use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ParleyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("session store error: {0}")]
    Store(String),

    #[error("upload error: {0}")]
    Upload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("endpoint.base_url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: endpoint.base_url is empty"
        );
    }

    #[test]
    fn parley_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ParleyError = config_err.into();
        assert!(matches!(err, ParleyError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn parley_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ParleyError = io_err.into();
        assert!(matches!(err, ParleyError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn parley_error_other_variants() {
        let err = ParleyError::Store("corrupt file".into());
        assert_eq!(err.to_string(), "session store error: corrupt file");

        let err = ParleyError::Upload("missing token".into());
        assert_eq!(err.to_string(), "upload error: missing token");
    }
}
