//! The public page view model.

use folio_core::page::{Section, SectionVisibility};
use serde::Serialize;

use crate::models::about::About;
use crate::models::get_in_touch::{GetInTouch, InfoItem, SocialLink};
use crate::models::hero::Hero;
use crate::models::process::{Process, Step};
use crate::models::project::ProjectWithSkills;
use crate::models::site_metadata::SiteMetadata;
use crate::models::skill::{Skill, SkillGroup};

/// An active skill group with its active skills.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroupWithSkills {
    #[serde(flatten)]
    pub group: SkillGroup,
    pub skills: Vec<Skill>,
}

/// The rendered process with its active steps.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessWithSteps {
    #[serde(flatten)]
    pub process: Process,
    pub steps: Vec<Step>,
}

/// The active contact section with its active details and links.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSection {
    #[serde(flatten)]
    pub get_in_touch: GetInTouch,
    pub info_items: Vec<InfoItem>,
    pub social_links: Vec<SocialLink>,
}

/// Everything the page shows, read from one snapshot.
///
/// Missing singletons are `None`; the renderer hides the matching section.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub metadata: Option<SiteMetadata>,
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub skill_groups: Vec<SkillGroupWithSkills>,
    pub projects: Vec<ProjectWithSkills>,
    pub process: Option<ProcessWithSteps>,
    pub get_in_touch: Option<ContactSection>,
    pub sections: SectionVisibility,
}

/// Unfiltered page content before visibility toggles are applied.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub metadata: Option<SiteMetadata>,
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub skill_groups: Vec<SkillGroupWithSkills>,
    pub projects: Vec<ProjectWithSkills>,
    pub process: Option<ProcessWithSteps>,
    pub get_in_touch: Option<ContactSection>,
}

impl PageView {
    /// Apply section toggles to the loaded content.
    pub fn assemble(content: PageContent, sections: SectionVisibility) -> Self {
        PageView {
            metadata: content.metadata,
            hero: content.hero,
            about: sections.gate(Section::AboutMe, content.about),
            skill_groups: sections.gate_list(Section::Skills, content.skill_groups),
            projects: sections.gate_list(Section::Projects, content.projects),
            process: sections.gate(Section::Process, content.process),
            get_in_touch: sections.gate(Section::GetInTouch, content.get_in_touch),
            sections,
        }
    }
}
