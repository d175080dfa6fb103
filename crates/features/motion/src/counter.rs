use std::time::Duration;

/// Linear count-up from zero to `target` over a fixed number of steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    target: f64,
    steps: u32,
    step: u32,
    value: f64,
}

impl Counter {
    #[must_use]
    pub const fn new(target: f64, steps: u32) -> Self {
        if steps == 0 {
            return Self { target, steps, step: 0, value: target };
        }
        Self { target, steps, step: 0, value: 0.0 }
    }

    /// Moves one step forward. Returns `false` once the target has been reached.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.step += 1;
        let raw = self.target * f64::from(self.step) / f64::from(self.steps);
        self.value = floor_tenth(raw.min(self.target));
        if self.step >= self.steps {
            self.value = self.target;
        }
        true
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps == 0 || self.step >= self.steps
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Renders the value with one decimal, dropping a trailing `.0`.
    #[must_use]
    pub fn display(&self) -> String {
        format_tenths(self.value)
    }
}

/// Start offsets for a row of counters that kick off one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSchedule {
    pub stagger: Duration,
    pub interval: Duration,
    pub steps: u32,
}

impl CounterSchedule {
    /// Delay before counter `index` starts: `(index + 1) * stagger`.
    #[must_use]
    pub fn start_delay(&self, index: usize) -> Duration {
        let n = u32::try_from(index).unwrap_or(u32::MAX - 1).saturating_add(1);
        self.stagger.saturating_mul(n)
    }
}

fn floor_tenth(value: f64) -> f64 {
    // Nudge before flooring so 2.8 * 50 / 50 doesn't land on 2.7999...
    ((value * 10.0) + 1e-9).floor() / 10.0
}

fn format_tenths(value: f64) -> String {
    let formatted = format!("{value:.1}");
    formatted.strip_suffix(".0").map_or(formatted.clone(), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counter: &mut Counter) -> usize {
        let mut ticks = 0;
        while counter.advance() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn reaches_target_in_exact_steps() {
        let mut counter = Counter::new(15.0, 50);
        assert_eq!(run(&mut counter), 50);
        assert_eq!(counter.display(), "15");
        assert!(!counter.advance());
    }

    #[test]
    fn fractional_targets_keep_one_decimal() {
        let mut counter = Counter::new(2.8, 50);
        counter.advance();
        assert!((counter.value() - 0.0).abs() < f64::EPSILON);
        run(&mut counter);
        assert_eq!(counter.display(), "2.8");

        let mut uptime = Counter::new(99.9, 50);
        run(&mut uptime);
        assert_eq!(uptime.display(), "99.9");
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        let mut counter = Counter::new(99.9, 50);
        let mut last = 0.0;
        while counter.advance() {
            assert!(counter.value() >= last);
            assert!(counter.value() <= 99.9);
            last = counter.value();
        }
    }

    #[test]
    fn midway_value_is_linear() {
        let mut counter = Counter::new(15.0, 50);
        for _ in 0..25 {
            counter.advance();
        }
        assert_eq!(counter.display(), "7.5");
    }

    #[test]
    fn zero_steps_finish_immediately() {
        let mut counter = Counter::new(42.0, 0);
        assert!(counter.is_finished());
        assert!(!counter.advance());
        assert_eq!(counter.display(), "42");
    }

    #[test]
    fn schedule_staggers_from_first_slot() {
        let schedule = CounterSchedule {
            stagger: Duration::from_millis(200),
            interval: Duration::from_millis(50),
            steps: 50,
        };
        assert_eq!(schedule.start_delay(0), Duration::from_millis(200));
        assert_eq!(schedule.start_delay(2), Duration::from_millis(600));
    }
}
