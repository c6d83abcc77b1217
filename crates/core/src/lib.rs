//! Domain types and pure logic shared by the storage and HTTP layers.

pub mod error;
pub mod page;
pub mod pagination;
pub mod patch;
pub mod roles;
pub mod search;
pub mod singleton;
pub mod site;
pub mod types;
pub mod validation;
