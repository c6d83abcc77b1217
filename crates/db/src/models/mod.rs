//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches; nullable columns use
//!   `Option<Option<T>>` so an explicit `null` clears them

pub mod about;
pub mod filter;
pub mod get_in_touch;
pub mod hero;
pub mod message;
pub mod overview;
pub mod page;
pub mod process;
pub mod project;
pub mod sections;
pub mod site_metadata;
pub mod skill;
