//! # Domain Models
//!
//! This crate contains pure portfolio types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, rendering, or timing logic, only data and simple helpers.
//!
//! Content types borrow `&'static str` so the whole profile can live in a `static`.

pub mod config;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod section;
pub mod skills;

pub use section::SectionId;
