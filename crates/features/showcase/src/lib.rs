//! Showcase feature slice: what the projects grid and the experience
//! timeline display for a given selection.

mod filter;
mod stats;
mod timeline;

pub use filter::{FilterTab, ProjectFilter, filter_projects, filter_tabs};
pub use stats::{ProjectStats, TechPreview};
pub use timeline::TimelineSide;
