//! Partial-update fields for nullable columns.
//!
//! An update DTO field of type `Option<Option<T>>` distinguishes three
//! states: key absent (`None`, keep the stored value), key present with
//! `null` (`Some(None)`, clear the column) and key present with a value
//! (`Some(Some(v))`, overwrite). Serde collapses `null` into the outer
//! `None` on its own, so such fields are declared with
//!
//! ```ignore
//! #[serde(default, deserialize_with = "folio_core::patch::present")]
//! ```

use serde::{Deserialize, Deserializer};

/// Deserialize a field that is present in the payload, `null` included.
///
/// Absent keys never reach this function; `#[serde(default)]` leaves them
/// as `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The text a patch field will store, if any.
pub fn patched_str(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.as_deref())
}
