//! # Content
//!
//! The literal portfolio content. Every section component renders straight
//! from [`PROFILE`]; nothing here changes after compilation.

mod about;
mod contact;
mod experience;
mod hero;
mod projects;
mod skills;

use folio_domain::profile::{FooterContent, Identity, Profile};
use folio_domain::skills::TechBadge;

pub use contact::{CONTACT_CHANNELS, FOOTER_SOCIAL, POSTS, SOCIAL_LINKS};
pub use projects::{GITHUB_PROFILE, PROJECTS};

pub const IDENTITY: Identity = Identity {
    full_name: "Najimudeen Mohammed Sanan",
    display_name: "Najimudeen Sanan",
    headline: "Full-Stack Software Engineer",
    tagline: "2.8+ Years Experience Building Scalable Solutions • Expert in MERN Stack, Python & AI/ML",
    summary: "Passionate full-stack developer with expertise in modern web technologies and a drive for creating impactful solutions",
    location: "Negombo, Western Province, Sri Lanka",
    timezone: "UTC+05:30 (Colombo Time)",
    email: "Shinanmohamed363@gmail.com",
    linkedin: "https://www.linkedin.com/in/shinanmohamed363",
    github: GITHUB_PROFILE,
    portrait: "/profile.jpg",
    resume_path: "/Mohamed_sanan_cv (1).pdf",
    resume_file_name: "Najimudeen_Mohammed_Sanan_Resume.pdf",
};

const FOOTER_TECH: &[TechBadge] = &[
    TechBadge { name: "React", icon: "⚛️" },
    TechBadge { name: "Node.js", icon: "🟢" },
    TechBadge { name: "Python", icon: "🐍" },
    TechBadge { name: "MongoDB", icon: "🍃" },
    TechBadge { name: "Laravel", icon: "🔥" },
];

/// The whole page.
pub static PROFILE: Profile = Profile {
    identity: IDENTITY,
    hero: hero::HERO,
    about: about::ABOUT,
    skills: skills::SKILLS,
    projects: PROJECTS,
    experience: experience::EXPERIENCE,
    contact: contact::CONTACT,
    footer: FooterContent {
        blurb: "Full-Stack Software Engineer with 2.8+ years of experience building scalable, user-centric applications. Passionate about creating impactful solutions using modern technologies.",
        tech: FOOTER_TECH,
        social: FOOTER_SOCIAL,
    },
};
