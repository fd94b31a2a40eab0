// SPDX-License-Identifier: MPL-2.0
//! Per-item display timer.
//!
//! Only running time counts toward the item's duration: pausing freezes the
//! elapsed time, resuming continues from where it stopped.

use std::time::{Duration, Instant};

/// Pausable countdown for the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTimer {
    duration: Duration,
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl ItemTimer {
    /// Creates a stopped timer for an item of the given duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    /// Starts or resumes the timer. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    /// Pauses the timer, banking the running time. No-op if already paused.
    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Non-paused time spent on the item, capped at its duration.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        let running = self
            .running_since
            .map_or(Duration::ZERO, |since| now.saturating_duration_since(since));
        (self.accumulated + running).min(self.duration)
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// Elapsed share of the duration in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    #[must_use]
    pub fn is_elapsed(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_timer_is_stopped_at_zero() {
        let timer = ItemTimer::new(ms(5_000));
        let now = Instant::now();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(now + ms(1_000)), Duration::ZERO);
    }

    #[test]
    fn running_time_accumulates() {
        let t0 = Instant::now();
        let mut timer = ItemTimer::new(ms(5_000));
        timer.start(t0);
        assert_eq!(timer.elapsed(t0 + ms(1_200)), ms(1_200));
        assert_eq!(timer.remaining(t0 + ms(1_200)), ms(3_800));
    }

    #[test]
    fn pause_freezes_elapsed_time() {
        let t0 = Instant::now();
        let mut timer = ItemTimer::new(ms(5_000));
        timer.start(t0);
        timer.pause(t0 + ms(1_000));
        assert_eq!(timer.elapsed(t0 + ms(4_000)), ms(1_000));
        timer.start(t0 + ms(3_000));
        assert_eq!(timer.elapsed(t0 + ms(4_000)), ms(2_000));
    }

    #[test]
    fn pausing_extends_wall_time_without_reset() {
        let t0 = Instant::now();
        let mut timer = ItemTimer::new(ms(5_000));
        timer.start(t0);
        timer.pause(t0 + ms(1_000));
        timer.start(t0 + ms(3_000));
        assert!(!timer.is_elapsed(t0 + ms(6_999)));
        assert!(timer.is_elapsed(t0 + ms(7_000)));
    }

    #[test]
    fn start_and_pause_are_idempotent() {
        let t0 = Instant::now();
        let mut timer = ItemTimer::new(ms(5_000));
        timer.start(t0);
        timer.start(t0 + ms(500));
        timer.pause(t0 + ms(1_000));
        timer.pause(t0 + ms(2_000));
        assert_eq!(timer.elapsed(t0 + ms(3_000)), ms(1_000));
    }

    #[test]
    fn fraction_is_linear_and_capped() {
        let t0 = Instant::now();
        let mut timer = ItemTimer::new(ms(4_000));
        timer.start(t0);
        assert_abs_diff_eq!(timer.fraction(t0 + ms(1_000)), 0.25, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(timer.fraction(t0 + ms(9_000)), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn zero_duration_is_immediately_elapsed() {
        let t0 = Instant::now();
        let timer = ItemTimer::new(Duration::ZERO);
        assert!(timer.is_elapsed(t0));
        assert_eq!(timer.fraction(t0), 1.0);
    }
}
