use serde::Serialize;

/// Small icon + name pair used in the hero and footer badge rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechBadge {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Headline figure such as `2.8+ Years Experience`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    /// Numeric target for count-up animations.
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// Proficiency bar in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechLevel {
    pub name: &'static str,
    /// Percentage in `0..=100`.
    pub level: u8,
    pub icon: &'static str,
    /// Gradient classes for the bar fill.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage in `0..=100`.
    pub level: u8,
    /// Years of use, kept as written (`"2.8"`).
    pub years: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub icon: &'static str,
}

/// Icon card with a title and a line of text (achievements, highlights, milestones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub icon: &'static str,
    pub title: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
}
