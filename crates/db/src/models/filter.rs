//! Query filters shared by the admin listings.

use folio_core::search::like_pattern;
use serde::Deserialize;

/// Filter for top-level listings (`?is_active=&q=`).
///
/// `q` is a case-insensitive substring matched against the searchable text
/// columns of each table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    pub is_active: Option<bool>,
    pub q: Option<String>,
}

impl ListFilter {
    /// `ILIKE` pattern for `q`, or `None` to skip the search clause.
    pub fn pattern(&self) -> Option<String> {
        like_pattern(self.q.as_deref())
    }
}
