use folio_domain::config::MotionConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between typed characters.
    pub type_interval: Duration,
    /// How long a completed role stays on screen.
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self { type_interval: Duration::from_millis(100), hold: Duration::from_millis(2000) }
    }
}

impl From<&MotionConfig> for TypewriterTiming {
    fn from(config: &MotionConfig) -> Self {
        Self { type_interval: config.type_interval(), hold: config.hold() }
    }
}

/// Types each role one character at a time, holds it, then moves on.
///
/// ```
/// use folio_motion::{Typewriter, TypewriterTiming};
///
/// let mut tw = Typewriter::new(&["Hi", "Yo"], TypewriterTiming::default());
/// tw.tick();
/// tw.tick();
/// assert_eq!(tw.text(), "Hi");
/// assert!(tw.is_complete());
/// tw.tick();
/// assert_eq!(tw.text(), "");
/// assert_eq!(tw.role(), "Yo");
/// ```
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: &'static [&'static str],
    timing: TypewriterTiming,
    role_index: usize,
    /// Byte length of the visible prefix, always on a char boundary.
    shown: usize,
}

impl Typewriter {
    #[must_use]
    pub const fn new(roles: &'static [&'static str], timing: TypewriterTiming) -> Self {
        Self { roles, timing, role_index: 0, shown: 0 }
    }

    /// Advances one step and returns the delay before the next call.
    pub fn tick(&mut self) -> Duration {
        if self.roles.is_empty() {
            return self.timing.type_interval;
        }

        if self.is_complete() {
            self.role_index = (self.role_index + 1) % self.roles.len();
            self.shown = 0;
            tracing::trace!(role = self.role(), "Typewriter moved to next role");
            return self.timing.type_interval;
        }

        let role = self.role();
        self.shown = role[self.shown..]
            .chars()
            .next()
            .map_or(role.len(), |c| self.shown + c.len_utf8());

        if self.is_complete() { self.timing.hold } else { self.timing.type_interval }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        &self.role()[..self.shown]
    }

    /// The role currently being typed; empty when there are no roles.
    #[must_use]
    pub fn role(&self) -> &'static str {
        self.roles.get(self.role_index).copied().unwrap_or_default()
    }

    #[must_use]
    pub const fn role_index(&self) -> usize {
        self.role_index
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.roles.is_empty() && self.shown == self.role().len()
    }
}

/// Blinking caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    visible: bool,
    period: Duration,
}

impl Blink {
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { visible: true, period }
    }

    /// Flips visibility and returns the delay before the next flip.
    pub const fn toggle(&mut self) -> Duration {
        self.visible = !self.visible;
        self.period
    }

    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &[&str] = &["Dev", "AI"];

    fn timing() -> TypewriterTiming {
        TypewriterTiming { type_interval: Duration::from_millis(10), hold: Duration::from_millis(99) }
    }

    #[test]
    fn types_one_char_per_tick() {
        let mut tw = Typewriter::new(ROLES, timing());
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), Duration::from_millis(10));
        assert_eq!(tw.text(), "D");
        assert_eq!(tw.tick(), Duration::from_millis(10));
        assert_eq!(tw.text(), "De");
    }

    #[test]
    fn holds_then_advances_and_wraps() {
        let mut tw = Typewriter::new(ROLES, timing());
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick(), Duration::from_millis(99));
        assert_eq!(tw.text(), "Dev");

        tw.tick();
        assert_eq!(tw.role_index(), 1);
        assert_eq!(tw.text(), "");

        tw.tick();
        tw.tick();
        assert!(tw.is_complete());
        tw.tick();
        assert_eq!(tw.role_index(), 0);
        assert_eq!(tw.role(), "Dev");
    }

    #[test]
    fn multibyte_roles_stay_on_char_boundaries() {
        let mut tw = Typewriter::new(&["é→x"], timing());
        tw.tick();
        assert_eq!(tw.text(), "é");
        tw.tick();
        assert_eq!(tw.text(), "é→");
        tw.tick();
        assert!(tw.is_complete());
    }

    #[test]
    fn empty_role_list_is_inert() {
        let mut tw = Typewriter::new(&[], timing());
        for _ in 0..5 {
            assert_eq!(tw.tick(), Duration::from_millis(10));
        }
        assert_eq!(tw.text(), "");
        assert!(!tw.is_complete());
    }

    #[test]
    fn empty_role_is_held_then_skipped() {
        let mut tw = Typewriter::new(&["", "A"], timing());
        assert!(tw.is_complete());
        tw.tick();
        assert_eq!(tw.role(), "A");
    }

    #[test]
    fn blink_alternates() {
        let mut blink = Blink::new(Duration::from_millis(500));
        assert!(blink.visible());
        assert_eq!(blink.toggle(), Duration::from_millis(500));
        assert!(!blink.visible());
        blink.toggle();
        assert!(blink.visible());
    }
}
