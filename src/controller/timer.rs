//! Auto-advance timer for the hero carousel.
//!
//! A deadline-based recurring timer polled from the main event loop. At most
//! one deadline is armed per instance; every manual navigation goes through
//! stop-then-start so a stale deadline can never fire inside the new window
//! and double-advance the carousel.

use std::time::{Duration, Instant};

/// Timer lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No deadline armed.
    Stopped,
    /// A single deadline is armed.
    Running,
}

/// Recurring deadline timer driven by the event loop.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    period: Duration,
    state: TimerState,
    deadline: Option<Instant>,
}

impl AutoAdvance {
    /// Creates a stopped timer with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            state: TimerState::Stopped,
            deadline: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Whether a deadline is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Arms a deadline at `now + period` if stopped.
    ///
    /// Starting while already running is a no-op: the armed deadline stands
    /// and no second one is created.
    pub fn start(&mut self, now: Instant) {
        if self.state == TimerState::Running {
            return;
        }
        self.deadline = Some(now + self.period);
        self.state = TimerState::Running;
    }

    /// Disarms the deadline. Idempotent.
    pub fn stop(&mut self) {
        self.deadline = None;
        self.state = TimerState::Stopped;
    }

    /// Stops then starts, resetting the countdown window from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    /// Returns true when the armed deadline has elapsed, re-arming the next
    /// period from `now`. Returns false while stopped or before the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if self.state == TimerState::Running && now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}
