use crate::spy::{ScrollSpy, SectionBounds};
use folio_domain::SectionId;
use serde::{Deserialize, Serialize};

/// Scroll depth, in pixels, after which the bar switches to its solid style.
pub const SCROLLED_AFTER: f64 = 20.0;

/// Events reported by the page script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewportEvent {
    Scroll {
        y: f64,
        width: f64,
        #[serde(default)]
        sections: Vec<SectionBounds>,
    },
    Escape,
    OutsideClick,
}

/// Smooth-scroll request produced by a navigation click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    pub section: SectionId,
    /// Height of the fixed bar to leave above the section.
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation bar state.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub active: SectionId,
    pub viewport_width: f64,
    spy: ScrollSpy,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            active: SectionId::Hero,
            viewport_width: 1280.0,
            spy: ScrollSpy::default(),
        }
    }
}

impl NavState {
    pub fn apply(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Scroll { y, width, sections } => {
                self.scrolled = y > SCROLLED_AFTER;
                self.viewport_width = width;
                self.close_menu();
                if let Some(active) = self.spy.detect(&sections)
                    && active != self.active
                {
                    tracing::debug!(section = %active, "Active section changed");
                    self.active = active;
                }
            }
            ViewportEvent::Escape | ViewportEvent::OutsideClick => self.close_menu(),
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "Mobile menu toggled");
    }

    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Closes the menu and returns where to scroll.
    pub fn navigate(&mut self, section: SectionId) -> ScrollTarget {
        self.close_menu();
        ScrollTarget { section, offset: nav_offset(self.viewport_width) }
    }

    #[must_use]
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }
}

/// Height of the fixed navigation bar at a given viewport width.
#[must_use]
pub fn nav_offset(width: f64) -> u32 {
    if width <= 400.0 {
        60
    } else if width <= 768.0 {
        70
    } else {
        80
    }
}

/// One link per section, in page order.
#[must_use]
pub fn nav_items() -> Vec<NavItem> {
    SectionId::ALL
        .into_iter()
        .map(|section| NavItem { section, label: section.label(), href: href(section) })
        .collect()
}

const fn href(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "#hero",
        SectionId::About => "#about",
        SectionId::Skills => "#skills",
        SectionId::Projects => "#projects",
        SectionId::Experience => "#experience",
        SectionId::Contact => "#contact",
    }
}
