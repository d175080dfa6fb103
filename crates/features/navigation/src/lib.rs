//! Navigation feature slice.
//!
//! The page script reports scroll position, section bounds and key/click
//! events as [`ViewportEvent`]s; [`NavState`] folds them into what the
//! navigation bar shows.

mod spy;
mod state;

pub use spy::{PROBE_OFFSET, ScrollSpy, SectionBounds};
pub use state::{NavItem, NavState, SCROLLED_AFTER, ScrollTarget, ViewportEvent, nav_items, nav_offset};
