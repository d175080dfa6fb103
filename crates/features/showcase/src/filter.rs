use folio_domain::project::{Project, ProjectCategory};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// Selected tab above the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Industrial,
    Personal,
}

impl ProjectFilter {
    #[must_use]
    pub const fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Industrial => matches!(project.category, ProjectCategory::Industrial),
            Self::Personal => matches!(project.category, ProjectCategory::Personal),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Industrial => "Industrial",
            Self::Personal => "Personal",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "🎯",
            Self::Industrial => "🏭",
            Self::Personal => "💡",
        }
    }
}

/// Projects matching `filter`, in source order.
#[must_use]
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).copied().collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: ProjectFilter,
    pub count: usize,
}

impl FilterTab {
    /// `"Industrial (4)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.filter.label(), self.count)
    }
}

/// One tab per filter with the number of projects it would show.
#[must_use]
pub fn filter_tabs(projects: &[Project]) -> Vec<FilterTab> {
    ProjectFilter::iter()
        .map(|filter| FilterTab {
            filter,
            count: projects.iter().filter(|p| filter.matches(p)).count(),
        })
        .collect()
}
