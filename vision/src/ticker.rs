//! Fixed-rate tick schedule for the live feed.
//!
//! The UI loop polls the ticker with the current time; a tick is due once the
//! interval has elapsed since the previous one. A late poll yields a single
//! tick, never a burst of catch-up ticks.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl FrameTicker {
    /// Creates a stopped ticker firing `fps` times per second
    pub fn new(fps: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Starts the schedule; the first tick is due immediately
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Returns true and schedules the next tick if one is due at `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when stopped
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}
