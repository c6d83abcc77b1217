//! Portfolio project model and DTOs.

use folio_core::patch;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::skill::Skill;

/// Source URL stored when a project is created without one.
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/";

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
    /// Listing position; lower comes first, unset sorts last.
    pub ordering_index: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    /// Defaults to [`DEFAULT_SOURCE_URL`] if omitted.
    pub source_url: Option<String>,
    pub ordering_index: Option<i32>,
    pub is_active: Option<bool>,
    /// Skills linked to the project.
    #[serde(default)]
    pub skill_ids: Vec<DbId>,
}

/// DTO for updating a project. Omitted fields are kept; `null` clears a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "patch::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub demo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub source_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub ordering_index: Option<Option<i32>>,
    pub is_active: Option<bool>,
    /// When present, replaces the full set of linked skills.
    pub skill_ids: Option<Vec<DbId>>,
}

/// A project together with its linked skills.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithSkills {
    #[serde(flatten)]
    pub project: Project,
    pub skills: Vec<Skill>,
}

/// Join row used when loading skills for many projects at once.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectSkillRow {
    pub project_id: DbId,
    #[sqlx(flatten)]
    pub skill: Skill,
}
