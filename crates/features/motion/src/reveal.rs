use folio_domain::SectionId;
use std::time::Duration;

/// Fraction of a section that must be visible before it reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(pub f64);

impl Threshold {
    pub const ABOUT: Self = Self(0.3);
    pub const DEFAULT: Self = Self(0.2);

    #[must_use]
    pub const fn for_section(section: SectionId) -> Self {
        match section {
            SectionId::About => Self::ABOUT,
            _ => Self::DEFAULT,
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// One-way visibility latch for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    /// Feeds an intersection report. Returns `true` only on the first reveal.
    pub const fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn section_class(&self) -> &'static str {
        if self.revealed { "section-reveal revealed" } else { "section-reveal" }
    }

    #[must_use]
    pub const fn card_class(&self) -> &'static str {
        if self.revealed { "card-stagger animate" } else { "card-stagger" }
    }
}

/// Linear per-item animation delay: `offset + index * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step: Duration,
    pub offset: Duration,
}

impl Stagger {
    #[must_use]
    pub const fn new(step_ms: u64) -> Self {
        Self { step: Duration::from_millis(step_ms), offset: Duration::ZERO }
    }

    #[must_use]
    pub const fn offset(mut self, offset_ms: u64) -> Self {
        self.offset = Duration::from_millis(offset_ms);
        self
    }

    #[must_use]
    pub fn delay(&self, index: usize) -> Duration {
        let n = u32::try_from(index).unwrap_or(u32::MAX);
        self.offset.saturating_add(self.step.saturating_mul(n))
    }

    /// Delay as a CSS time value (`"300ms"`).
    #[must_use]
    pub fn css(&self, index: usize) -> String {
        format!("{}ms", self.delay(index).as_millis())
    }
}

/// Width of a proficiency bar: full level once revealed, collapsed before.
#[must_use]
pub fn bar_width(level: u8, revealed: bool) -> String {
    if revealed { format!("{}%", level.min(100)) } else { "0%".to_owned() }
}
