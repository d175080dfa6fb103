use crate::contact::{ContactChannel, Post, SocialLink};
use crate::experience::{ExperienceEntry, Reference, SkillGroup};
use crate::project::Project;
use crate::skills::{
    Certification, Education, Highlight, SkillCategory, Stat, TechBadge, TechLevel,
};
use serde::Serialize;

/// Who the page is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub full_name: &'static str,
    pub display_name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub timezone: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub portrait: &'static str,
    pub resume_path: &'static str,
    pub resume_file_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroContent {
    /// Role strings cycled by the typewriter.
    pub roles: &'static [&'static str],
    pub stats: &'static [Stat],
    pub tech: &'static [TechBadge],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    pub intro: &'static str,
    pub paragraphs: &'static [&'static str],
    pub achievements: &'static [Highlight],
    pub tech_levels: &'static [TechLevel],
    pub education: &'static [Education],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillsContent {
    pub intro: &'static str,
    pub categories: &'static [SkillCategory],
    pub certifications: &'static [Certification],
    pub highlights: &'static [Highlight],
    pub philosophy: &'static str,
    pub values: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceContent {
    pub intro: &'static str,
    pub entries: &'static [ExperienceEntry],
    pub skill_groups: &'static [SkillGroup],
    pub milestones: &'static [Highlight],
    pub reference: Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactContent {
    pub intro: &'static str,
    pub channels: &'static [ContactChannel],
    pub social: &'static [SocialLink],
    pub posts: &'static [Post],
    pub availability: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterContent {
    pub blurb: &'static str,
    pub tech: &'static [TechBadge],
    pub social: &'static [SocialLink],
}

/// Everything the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    pub identity: Identity,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub skills: SkillsContent,
    pub projects: &'static [Project],
    pub experience: ExperienceContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}
