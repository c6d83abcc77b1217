//! Field checks applied to administrative writes.
//!
//! Contact submissions bypass these: they are stored exactly as received.

use crate::error::CoreError;

/// Length cap for short text fields (titles, names, labels).
pub const MAX_SHORT_TEXT: usize = 255;

/// Reject `value` if it is longer than `max` characters.
pub fn validate_max_len(value: Option<&str>, field: &str, max: usize) -> Result<(), CoreError> {
    if let Some(v) = value {
        let len = v.chars().count();
        if len > max {
            return Err(CoreError::Validation(format!(
                "{field} must be at most {max} characters, got {len}"
            )));
        }
    }
    Ok(())
}

/// Shorthand for [`validate_max_len`] with [`MAX_SHORT_TEXT`].
pub fn validate_short_text(value: Option<&str>, field: &str) -> Result<(), CoreError> {
    validate_max_len(value, field, MAX_SHORT_TEXT)
}

/// Reject `value` unless it is an absolute `http` or `https` URL with a host.
///
/// Empty strings are treated as "no URL" and accepted.
pub fn validate_url(value: Option<&str>, field: &str) -> Result<(), CoreError> {
    let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };

    let rest = v
        .strip_prefix("https://")
        .or_else(|| v.strip_prefix("http://"))
        .ok_or_else(|| CoreError::Validation(format!("{field} must start with http:// or https://")))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(CoreError::Validation(format!("{field} must include a valid host")));
    }
    Ok(())
}
