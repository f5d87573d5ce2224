//! Sources of elapsed animation time

use std::cell::Cell;
use web_sys::Performance;

/// Supplies monotonically non-decreasing seconds since the animation started
pub trait ClockSource {
    fn elapsed_seconds(&self) -> f64;
}

/// Per-frame time snapshot, read-only to the tree generator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub elapsed_seconds: f64,
}

impl AnimationState {
    pub fn sample<C: ClockSource + ?Sized>(clock: &C) -> Self {
        Self {
            elapsed_seconds: clock.elapsed_seconds(),
        }
    }
}

/// Clock driven by hand, for tests and timeline scrubbing
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            elapsed: Cell::new(start),
        }
    }

    /// Move forward by `dt` seconds; negative steps are ignored
    pub fn advance(&self, dt: f64) {
        if dt > 0.0 {
            self.elapsed.set(self.elapsed.get() + dt);
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, t: f64) {
        self.elapsed.set(t);
    }
}

impl ClockSource for ManualClock {
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed.get()
    }
}

/// Browser clock backed by `performance.now()`, falling back to `Date.now()`
pub struct PerformanceClock {
    performance: Option<Performance>,
    origin_ms: f64,
}

impl PerformanceClock {
    pub fn new() -> Self {
        let performance = web_sys::window().and_then(|w| w.performance());
        let origin_ms = Self::now_ms(performance.as_ref());
        Self {
            performance,
            origin_ms,
        }
    }

    fn now_ms(performance: Option<&Performance>) -> f64 {
        match performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for PerformanceClock {
    fn elapsed_seconds(&self) -> f64 {
        let now = Self::now_ms(self.performance.as_ref());
        ((now - self.origin_ms) / 1000.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1.0);
        clock.advance(0.5);
        assert_eq!(clock.elapsed_seconds(), 1.5);
        clock.advance(-3.0);
        assert_eq!(clock.elapsed_seconds(), 1.5);
    }

    #[test]
    fn test_animation_state_snapshot() {
        let clock = ManualClock::default();
        clock.set(4.25);
        let state = AnimationState::sample(&clock);
        assert_eq!(state.elapsed_seconds, 4.25);

        // Snapshot does not follow the clock
        clock.advance(1.0);
        assert_eq!(state.elapsed_seconds, 4.25);
    }
}
