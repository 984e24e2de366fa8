//! Shared helpers used by the validators.

/// Push an error unless `value` is an http(s) URL with a host.
pub(crate) fn validate_base_url(errors: &mut Vec<String>, name: &str, value: &str) {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));
    match rest {
        Some(rest) if !rest.trim_end_matches('/').is_empty() => {}
        Some(_) => errors.push(format!("{name} = {value:?} has no host")),
        None => errors.push(format!("{name} = {value:?} must start with http:// or https://")),
    }
}

/// Push an error unless `value` is an absolute URL path.
pub(crate) fn validate_path(errors: &mut Vec<String>, name: &str, value: &str) {
    if !value.starts_with('/') {
        errors.push(format!("{name} = {value:?} must start with '/'"));
    }
}

/// Push an error if a field name or key is blank.
pub(crate) fn validate_name(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
