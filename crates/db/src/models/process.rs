//! Work process and its steps.

use folio_core::patch;
use folio_core::search::like_pattern;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `processes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Process {
    pub id: DbId,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProcess {
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProcess {
    #[serde(default, deserialize_with = "patch::present")]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

/// A row from the `steps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `None` once the parent process has been deleted.
    pub process_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStep {
    pub title: Option<String>,
    pub description: Option<String>,
    pub process_id: Option<DbId>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStep {
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub process_id: Option<Option<DbId>>,
    pub is_active: Option<bool>,
}

/// A process as listed for the admin, with its active step count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProcessSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub process: Process,
    pub active_step_count: i64,
}

/// Filter for step listings (`?is_active=&process_id=&q=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepFilter {
    pub is_active: Option<bool>,
    pub process_id: Option<DbId>,
    pub q: Option<String>,
}

impl StepFilter {
    pub fn pattern(&self) -> Option<String> {
        like_pattern(self.q.as_deref())
    }
}
