//! Section visibility rules for the public page.
//!
//! The page carries five toggleable sections. A hidden section contributes
//! nothing to the view model: singletons become `None`, collections become
//! empty.

use serde::{Deserialize, Serialize};

/// A toggleable part of the public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    AboutMe,
    Projects,
    Skills,
    Process,
    GetInTouch,
}

/// Effective visibility of every toggleable section.
///
/// Defaults to everything visible, matching the column defaults of the
/// `sections` table when no row has been saved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVisibility {
    pub about_me: bool,
    pub projects: bool,
    pub skills: bool,
    pub process: bool,
    pub get_in_touch: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            about_me: true,
            projects: true,
            skills: true,
            process: true,
            get_in_touch: true,
        }
    }
}

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::AboutMe => self.about_me,
            Section::Projects => self.projects,
            Section::Skills => self.skills,
            Section::Process => self.process,
            Section::GetInTouch => self.get_in_touch,
        }
    }

    /// Drop a singleton's content when its section is hidden.
    pub fn gate<T>(&self, section: Section, value: Option<T>) -> Option<T> {
        value.filter(|_| self.is_visible(section))
    }

    /// Drop a collection's content when its section is hidden.
    pub fn gate_list<T>(&self, section: Section, items: Vec<T>) -> Vec<T> {
        if self.is_visible(section) {
            items
        } else {
            Vec::new()
        }
    }
}
