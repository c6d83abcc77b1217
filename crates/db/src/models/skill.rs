//! Skill groups and skills.

use folio_core::patch;
use folio_core::search::like_pattern;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skill_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillGroup {
    pub id: DbId,
    pub title: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSkillGroup {
    pub title: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkillGroup {
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    pub is_active: Option<bool>,
}

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub title: Option<String>,
    /// Icon markup or class name, rendered verbatim by the page.
    pub icon: Option<String>,
    /// `None` for ungrouped skills, including those whose group was deleted.
    pub group_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSkill {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub group_id: Option<DbId>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSkill {
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub group_id: Option<Option<DbId>>,
    pub is_active: Option<bool>,
}

/// A skill group as listed for the admin, with its active skill count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillGroupSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub group: SkillGroup,
    pub active_skill_count: i64,
}

/// Filter for skill listings (`?is_active=&group_id=&q=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillFilter {
    pub is_active: Option<bool>,
    pub group_id: Option<DbId>,
    pub q: Option<String>,
}

impl SkillFilter {
    pub fn pattern(&self) -> Option<String> {
        like_pattern(self.q.as_deref())
    }
}
