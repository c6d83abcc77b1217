//! Contact section ("get in touch") and its info items and social links.

use folio_core::patch;
use folio_core::search::like_pattern;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `get_in_touch` table. At most one row is active.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GetInTouch {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGetInTouch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGetInTouch {
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

/// A labelled contact detail (e.g. "Email" → address).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InfoItem {
    pub id: DbId,
    pub key: Option<String>,
    pub value: Option<String>,
    pub link: Option<String>,
    pub icon: Option<String>,
    /// `None` once the parent contact section has been deleted.
    pub get_in_touch_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInfoItem {
    pub key: Option<String>,
    pub value: Option<String>,
    pub link: Option<String>,
    pub icon: Option<String>,
    pub get_in_touch_id: Option<DbId>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInfoItem {
    #[serde(default, deserialize_with = "patch::present")]
    pub key: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub value: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub link: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub get_in_touch_id: Option<Option<DbId>>,
    pub is_active: Option<bool>,
}

/// A link to an external profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialLink {
    pub id: DbId,
    pub title: Option<String>,
    pub link: Option<String>,
    pub icon: Option<String>,
    /// `None` once the parent contact section has been deleted.
    pub get_in_touch_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSocialLink {
    pub title: Option<String>,
    pub link: Option<String>,
    pub icon: Option<String>,
    pub get_in_touch_id: Option<DbId>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSocialLink {
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub link: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub get_in_touch_id: Option<Option<DbId>>,
    pub is_active: Option<bool>,
}

/// A contact section as listed for the admin, with its active child counts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GetInTouchSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub get_in_touch: GetInTouch,
    pub active_info_count: i64,
    pub active_social_count: i64,
}

/// Filter for info item and social link listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactChildFilter {
    pub is_active: Option<bool>,
    pub get_in_touch_id: Option<DbId>,
    pub q: Option<String>,
}

impl ContactChildFilter {
    pub fn pattern(&self) -> Option<String> {
        like_pattern(self.q.as_deref())
    }
}
