//! Hero banner model and DTOs.

use folio_core::patch;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Greeting stored when a hero is created without one.
pub const DEFAULT_GREETING: &str = "Hello I'm";

/// A row from the `heroes` table. At most one row is active.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hero {
    pub id: DbId,
    pub greeting: Option<String>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a hero. `is_active` defaults to `true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHero {
    /// Defaults to [`DEFAULT_GREETING`] if omitted.
    pub greeting: Option<String>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a hero. Omitted fields are kept; `null` clears a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHero {
    #[serde(default, deserialize_with = "patch::present")]
    pub greeting: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub full_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub bio: Option<Option<String>>,
    pub is_active: Option<bool>,
}
