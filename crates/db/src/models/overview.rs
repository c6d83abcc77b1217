//! Admin dashboard summary.

use folio_core::singleton::SingletonKind;
use folio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Row counts per content table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentCounts {
    pub site_metadata: i64,
    pub heroes: i64,
    pub abouts: i64,
    pub get_in_touch: i64,
    pub info_items: i64,
    pub social_links: i64,
    pub projects: i64,
    pub skill_groups: i64,
    pub skills: i64,
    pub processes: i64,
    pub steps: i64,
    pub messages: i64,
}

/// The currently active row of one singleton kind, if any.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveSingleton {
    pub kind: SingletonKind,
    pub active_id: Option<DbId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub counts: ContentCounts,
    pub singletons: Vec<ActiveSingleton>,
}
