//! Fire-and-forget page commands.

use crate::scripts;
use dioxus::prelude::*;
use folio::domain::SectionId;

/// Scrolls to `section`, leaving `offset` pixels for the fixed navigation bar.
pub fn scroll_to_section(section: SectionId, offset: u32) {
    tracing::debug!(%section, offset, "Scrolling to section");
    _ = document::eval(&scripts::scroll_to(section.id(), offset));
}

pub fn scroll_to_top() {
    _ = document::eval(scripts::SCROLL_TO_TOP);
}
