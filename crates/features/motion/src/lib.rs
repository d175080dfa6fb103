//! Motion feature slice.
//!
//! Platform-neutral state for every animation on the page. The UI layer owns
//! the timers and observers; this crate only decides what the next frame
//! looks like and how long to wait for it.

mod counter;
mod reveal;
mod typewriter;

pub use counter::{Counter, CounterSchedule};
pub use reveal::{Reveal, Stagger, Threshold, bar_width};
pub use typewriter::{Blink, Typewriter, TypewriterTiming};
