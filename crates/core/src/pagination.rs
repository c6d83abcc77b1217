//! Limit/offset clamping for paginated listings.

/// Default page size for message listings.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Hard ceiling on page size.
pub const MAX_PAGE_SIZE: i64 = 200;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
