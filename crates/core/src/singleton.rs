//! Catalogue of content types that may have at most one active row.
//!
//! Each kind maps to a table and an advisory-lock key. Writers take the lock
//! for the kind, demote every other active row, then save their own row, all
//! inside one transaction.

use serde::Serialize;

/// A content type whose rows obey the at-most-one-active rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SingletonKind {
    SiteMetadata,
    Hero,
    About,
    GetInTouch,
}

impl SingletonKind {
    pub const ALL: [SingletonKind; 4] = [
        SingletonKind::SiteMetadata,
        SingletonKind::Hero,
        SingletonKind::About,
        SingletonKind::GetInTouch,
    ];

    /// Backing table name. Only ever interpolated from this fixed set.
    pub fn table(self) -> &'static str {
        match self {
            SingletonKind::SiteMetadata => "site_metadata",
            SingletonKind::Hero => "heroes",
            SingletonKind::About => "abouts",
            SingletonKind::GetInTouch => "get_in_touch",
        }
    }

    /// Human-readable entity name used in `NotFound` errors and logs.
    pub fn entity_name(self) -> &'static str {
        match self {
            SingletonKind::SiteMetadata => "MetaData",
            SingletonKind::Hero => "Hero",
            SingletonKind::About => "About",
            SingletonKind::GetInTouch => "GetInTouch",
        }
    }

    /// Key for `pg_advisory_xact_lock`. Distinct per kind so activations of
    /// different types never wait on each other.
    pub fn lock_key(self) -> i64 {
        const BASE: i64 = 0x466f_6c69_6f00;
        BASE + match self {
            SingletonKind::SiteMetadata => 1,
            SingletonKind::Hero => 2,
            SingletonKind::About => 3,
            SingletonKind::GetInTouch => 4,
        }
    }
}

/// Whether a save must demote the siblings of the row being written.
///
/// `requested` is the `is_active` value carried by the write; `default` is
/// what the column takes when the write omits it (`true` on insert, "keep the
/// current value" on update, expressed as `false` because an already-active
/// row implies its siblings are inactive).
pub fn activates(requested: Option<bool>, default: bool) -> bool {
    requested.unwrap_or(default)
}
