//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Singleton content
//! repositories route every activating write through [`SingletonRepo`].

pub mod about_repo;
pub mod get_in_touch_repo;
pub mod hero_repo;
pub mod info_item_repo;
pub mod message_repo;
pub mod overview_repo;
pub mod page_repo;
pub mod process_repo;
pub mod project_repo;
pub mod sections_repo;
pub mod singleton_repo;
pub mod site_metadata_repo;
pub mod skill_group_repo;
pub mod skill_repo;
pub mod social_link_repo;
pub mod step_repo;

pub use about_repo::AboutRepo;
pub use get_in_touch_repo::GetInTouchRepo;
pub use hero_repo::HeroRepo;
pub use info_item_repo::InfoItemRepo;
pub use message_repo::MessageRepo;
pub use overview_repo::OverviewRepo;
pub use page_repo::PageRepo;
pub use process_repo::ProcessRepo;
pub use project_repo::ProjectRepo;
pub use sections_repo::SectionsRepo;
pub use singleton_repo::SingletonRepo;
pub use site_metadata_repo::SiteMetadataRepo;
pub use skill_group_repo::SkillGroupRepo;
pub use skill_repo::SkillRepo;
pub use social_link_repo::SocialLinkRepo;
pub use step_repo::StepRepo;
