//! Per-logger stopwatch.

use std::time::{Duration, Instant};

/// Tracks the time since a logger last wrote output.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTracker {
    last: Instant,
}

impl ElapsedTracker {
    /// Start measuring from now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(last: Instant) -> Self {
        Self { last }
    }

    /// Time since the previous call (or construction), then reset to now.
    pub fn since_last(&mut self) -> Duration {
        self.since_last_at(Instant::now())
    }

    /// Same as [`since_last`](Self::since_last) with an explicit clock reading.
    pub fn since_last_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }
}

impl Default for ElapsedTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measures_from_start() {
        let start = Instant::now();
        let mut tracker = ElapsedTracker::starting_at(start);
        let elapsed = tracker.since_last_at(start + Duration::from_millis(250));
        assert_eq!(elapsed, Duration::from_millis(250));
    }

    #[test]
    fn test_resets_after_each_call() {
        let start = Instant::now();
        let mut tracker = ElapsedTracker::starting_at(start);
        tracker.since_last_at(start + Duration::from_millis(100));
        let elapsed = tracker.since_last_at(start + Duration::from_millis(105));
        assert_eq!(elapsed, Duration::from_millis(5));
    }

    #[test]
    fn test_clock_going_backwards_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut tracker = ElapsedTracker::starting_at(start);
        assert_eq!(tracker.since_last_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_successive_calls_near_zero() {
        let mut tracker = ElapsedTracker::new();
        tracker.since_last();
        assert!(tracker.since_last() < Duration::from_secs(1));
    }
}
