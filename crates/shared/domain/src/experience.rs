use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentKind {
    FullTime,
    Internship,
}

impl EmploymentKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-Time",
            Self::Internship => "Internship",
        }
    }
}

/// One position on the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub period: &'static str,
    pub progression: Option<&'static str>,
    pub kind: EmploymentKind,
    pub logo: &'static str,
    pub responsibilities: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

/// Skills grouped by area, as gained across positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}
