use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Anchor targets of the page, in top-to-bottom order.
///
/// The string form is the DOM element id used for in-page navigation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [Self; 6] =
        [Self::Hero, Self::About, Self::Skills, Self::Projects, Self::Experience, Self::Contact];

    /// Element id of the section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar and footer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }
}
