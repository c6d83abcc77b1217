//! Site-wide SEO and branding metadata.

use folio_core::patch;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_metadata` table. At most one row is active.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteMetadata {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub logo_character: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a metadata row. `is_active` defaults to `true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSiteMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub logo_character: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a metadata row. Omitted fields are kept; `null` clears a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteMetadata {
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub keywords: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub logo_character: Option<Option<String>>,
    pub is_active: Option<bool>,
}
