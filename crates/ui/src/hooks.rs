//! Hooks that drive the animations and the navigation bar.
//!
//! Timers run as component-scoped tasks and stop when the owning component
//! unmounts.

use crate::scripts;
use dioxus::prelude::*;
use folio::domain::SectionId;
use folio::features::motion::{
    Blink, Counter, CounterSchedule, Reveal, Threshold, Typewriter, TypewriterTiming,
};
use folio::features::navigation::{NavState, ViewportEvent};
use folio::kernel::time::sleep;
use std::time::Duration;

/// Latches to revealed the first time `section` scrolls into view.
///
/// Falls back to revealed when the page cannot run an observer, so content is
/// never left hidden.
pub fn use_reveal(section: SectionId) -> Signal<Reveal> {
    let mut reveal = use_signal(Reveal::default);

    use_future(move || async move {
        let threshold = Threshold::for_section(section).value();
        let mut eval = document::eval(&scripts::observe(section.id(), threshold));

        let intersecting = match eval.recv::<bool>().await {
            Ok(intersecting) => intersecting,
            Err(e) => {
                tracing::warn!(%section, error = ?e, "Observer unavailable, revealing now");
                true
            }
        };

        if reveal.write().observe(intersecting) {
            tracing::debug!(%section, "Section revealed");
        }
    });

    reveal
}

pub fn use_typewriter(
    roles: &'static [&'static str],
    timing: TypewriterTiming,
) -> Signal<Typewriter> {
    let mut typewriter = use_signal(|| Typewriter::new(roles, timing));

    use_future(move || async move {
        let mut delay = timing.type_interval;
        loop {
            sleep(delay).await;
            delay = typewriter.write().tick();
        }
    });

    typewriter
}

pub fn use_blink(period: Duration) -> Signal<Blink> {
    let mut blink = use_signal(|| Blink::new(period));

    use_future(move || async move {
        loop {
            sleep(period).await;
            blink.write().toggle();
        }
    });

    blink
}

/// Counts up to `target` once `reveal` fires, starting `schedule.start_delay(index)` later.
pub fn use_counter(
    target: f64,
    schedule: CounterSchedule,
    index: usize,
    reveal: Signal<Reveal>,
) -> Signal<Counter> {
    let mut counter = use_signal(|| Counter::new(target, schedule.steps));
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !reveal.read().is_revealed() || *started.peek() {
            return;
        }
        started.set(true);

        spawn(async move {
            sleep(schedule.start_delay(index)).await;
            while !counter.peek().is_finished() {
                sleep(schedule.interval).await;
                counter.write().advance();
            }
        });
    });

    counter
}

/// Navigation bar state fed by page scroll, resize, Escape and outside clicks.
pub fn use_viewport() -> Signal<NavState> {
    let mut nav = use_signal(NavState::default);

    use_future(move || async move {
        let mut eval = document::eval(&scripts::viewport(&SectionId::ALL));
        loop {
            match eval.recv::<ViewportEvent>().await {
                Ok(event) => {
                    let mut next = nav.peek().clone();
                    next.apply(event);
                    if next != *nav.peek() {
                        nav.set(next);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "Viewport events unavailable");
                    break;
                }
            }
        }
    });

    nav
}
