//! One module per page section.

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod navigation;
mod projects;
mod skills;

pub use about::{About, CounterCard, EducationGrid, TechLevels};
pub use contact::{
    Contact, ContactChannels, ContactFormView, FormField, PostList, SocialLinks, SubmitBanner,
};
pub use experience::{Experience, ExperienceCard, ExperienceTimeline, SkillGroups};
pub use footer::{Footer, QuickLinks};
pub use hero::Hero;
pub use navigation::{NavLinks, Navigation};
pub use projects::{FilterTabs, ProjectCard, ProjectGrid, ProjectStatsPanel, Projects};
pub use skills::{Certifications, SkillCategoryCard, Skills};
