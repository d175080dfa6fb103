use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Industrial,
    Personal,
}

impl ProjectCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Industrial => "Industrial",
            Self::Personal => "Personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    Ongoing,
}

impl ProjectStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Ongoing => "Ongoing",
        }
    }
}

/// A showcased project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub category: ProjectCategory,
    pub featured: bool,
    pub impact: Option<&'static str>,
    pub icon: &'static str,
    pub status: ProjectStatus,
}
