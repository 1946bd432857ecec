//! Active workspace path shared between invocations through an environment variable
//!
//! `cd` prints an export statement that the user evaluates in their shell, later `exec` reads
//! the variable back, nothing is stored by this program

use crate::error::DevcError;
use crate::{CONTAINER_WORKSPACE, ENV_WORKSPACE_PATH};

/// Trim whitespace and trailing slashes, a lone `/` is kept
pub fn normalize(path: &str) -> String {
    let path = path.trim();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() && path.starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Quote the string for POSIX shells, returned verbatim if no quoting is needed
pub fn shell_quote(value: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "_./:@%+=,-~".contains(c);

    if !value.is_empty() && value.chars().all(is_safe) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r#"'\''"#))
    }
}

/// Render shell statement that sets the active workspace path
///
/// The path is a location inside the container so it is not validated
pub fn publish(path: &str) -> Result<String, DevcError> {
    let path = normalize(path);
    if path.is_empty() {
        return Err(DevcError::missing("Path cannot be empty unless using --examples."));
    }

    Ok(format!("export {}={}", ENV_WORKSPACE_PATH, shell_quote(&path)))
}

/// Get active workspace path from the environ
pub fn resolve() -> String {
    resolve_from(std::env::var(ENV_WORKSPACE_PATH).ok())
}

/// Active workspace path from the variable value, default when unset or blank
pub fn resolve_from(value: Option<String>) -> String {
    match value {
        Some(x) if !x.trim().is_empty() => normalize(&x),
        _ => CONTAINER_WORKSPACE.to_string(),
    }
}
