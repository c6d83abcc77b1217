//! HTTP handlers, one module per resource.

pub mod abouts;
pub mod auth;
pub mod contact;
pub mod get_in_touch;
pub mod heroes;
pub mod info_items;
pub mod messages;
pub mod metadata;
pub mod overview;
pub mod page;
pub mod processes;
pub mod projects;
pub mod sections;
pub mod site;
pub mod skill_groups;
pub mod skills;
pub mod social_links;
pub mod steps;
