use serde::Serialize;

/// A direct contact route (email, phone, map location).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactChannel {
    /// `mailto:` and `tel:` links are handled in place; web links open a new tab.
    #[must_use]
    pub fn opens_externally(&self) -> bool {
        is_web_link(self.href)
    }
}

/// Outbound profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    /// Shown under the platform name; empty in compact link rows.
    pub handle: &'static str,
}

impl SocialLink {
    #[must_use]
    pub fn opens_externally(&self) -> bool {
        is_web_link(self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Text,
    Video,
}

impl PostKind {
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Text => "📝",
            Self::Video => "🎥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Post {
    pub title: &'static str,
    pub url: &'static str,
    pub kind: PostKind,
}

fn is_web_link(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
