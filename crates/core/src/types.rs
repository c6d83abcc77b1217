/// Row ids (`BIGSERIAL` / `BIGINT`).
pub type DbId = i64;

/// `TIMESTAMPTZ` values, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
