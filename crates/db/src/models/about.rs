//! About section model and DTOs.

use folio_core::patch;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `abouts` table. At most one row is active.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct About {
    pub id: DbId,
    pub about: Option<String>,
    /// Reference to an image held by the media store.
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAbout {
    pub about: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAbout {
    #[serde(default, deserialize_with = "patch::present")]
    pub about: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub avatar_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}
