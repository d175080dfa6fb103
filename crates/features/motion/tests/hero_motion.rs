use folio_motion::{Counter, CounterSchedule, Typewriter, TypewriterTiming};
use std::time::Duration;

const ROLES: &[&str] = &["Full-Stack Software Engineer", "MERN Stack Developer"];

#[test]
fn full_role_cycle_takes_typing_plus_hold() {
    let timing = TypewriterTiming::default();
    let mut tw = Typewriter::new(ROLES, timing);

    let mut elapsed = Duration::ZERO;
    while !tw.is_complete() {
        elapsed += tw.tick();
    }
    let chars = u32::try_from(ROLES[0].chars().count()).unwrap();
    assert_eq!(elapsed, timing.type_interval * (chars - 1) + timing.hold);
    assert_eq!(tw.text(), ROLES[0]);

    tw.tick();
    assert_eq!(tw.role(), ROLES[1]);
}

#[test]
fn hero_stats_settle_on_their_targets() {
    let schedule = CounterSchedule {
        stagger: Duration::from_millis(200),
        interval: Duration::from_millis(50),
        steps: 50,
    };
    let rendered: Vec<String> = [2.8, 15.0, 99.9]
        .into_iter()
        .map(|target| {
            let mut counter = Counter::new(target, schedule.steps);
            while counter.advance() {}
            counter.display()
        })
        .collect();

    assert_eq!(rendered, ["2.8", "15", "99.9"]);
    assert!(schedule.start_delay(2) > schedule.start_delay(0));
}
