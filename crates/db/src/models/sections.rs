//! Page section visibility toggles (single configuration row).

use folio_core::page::SectionVisibility;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sections` table. The page reads the first row by id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sections {
    pub id: DbId,
    pub about_me: bool,
    pub projects: bool,
    pub skills: bool,
    pub process: bool,
    pub get_in_touch: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving the toggles. Omitted fields keep their current value
/// (or the column default when no row exists yet).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSections {
    pub about_me: Option<bool>,
    pub projects: Option<bool>,
    pub skills: Option<bool>,
    pub process: Option<bool>,
    pub get_in_touch: Option<bool>,
}

impl From<&Sections> for SectionVisibility {
    fn from(s: &Sections) -> Self {
        SectionVisibility {
            about_me: s.about_me,
            projects: s.projects,
            skills: s.skills,
            process: s.process,
            get_in_touch: s.get_in_touch,
        }
    }
}
