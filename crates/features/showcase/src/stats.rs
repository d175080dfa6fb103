use folio_domain::project::{Project, ProjectCategory, ProjectStatus};

/// Summary row under the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectStats {
    pub total: usize,
    pub industrial: usize,
    pub personal: usize,
    pub completed: usize,
    /// Completed share as a whole percentage.
    pub success_rate: u32,
}

impl ProjectStats {
    #[must_use]
    pub fn collect(projects: &[Project]) -> Self {
        let count = |pred: fn(&Project) -> bool| projects.iter().filter(|p| pred(p)).count();

        let total = projects.len();
        let completed = count(|p| p.status == ProjectStatus::Completed);
        let success_rate = if total == 0 {
            0
        } else {
            u32::try_from(completed * 100 / total).unwrap_or(100)
        };

        Self {
            total,
            industrial: count(|p| p.category == ProjectCategory::Industrial),
            personal: count(|p| p.category == ProjectCategory::Personal),
            completed,
            success_rate,
        }
    }
}

/// First few technologies of a card plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechPreview {
    pub shown: Vec<&'static str>,
    pub hidden: usize,
}

impl TechPreview {
    #[must_use]
    pub fn of(tech: &[&'static str], limit: usize) -> Self {
        Self {
            shown: tech.iter().take(limit).copied().collect(),
            hidden: tech.len().saturating_sub(limit),
        }
    }

    /// `"+2"`, or `None` when nothing was cut.
    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_zero_rate() {
        assert_eq!(ProjectStats::collect(&[]), ProjectStats::default());
    }

    #[test]
    fn preview_truncates_with_overflow() {
        let preview = TechPreview::of(&["React", "Node.js", "MongoDB", "Docker", "AWS"], 3);
        assert_eq!(preview.shown, ["React", "Node.js", "MongoDB"]);
        assert_eq!(preview.overflow_label().as_deref(), Some("+2"));
    }

    #[test]
    fn short_lists_have_no_overflow() {
        let preview = TechPreview::of(&["Rust"], 3);
        assert_eq!(preview.shown, ["Rust"]);
        assert_eq!(preview.overflow_label(), None);
    }
}
