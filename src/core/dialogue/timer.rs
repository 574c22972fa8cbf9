//=========================================================================
// Delay Timer
//=========================================================================
//
// Single-slot "time remaining" timer replacing timed suspension.
//
// Lifecycle: start(delay) → tick(elapsed)* → fires once → idle
//
// Starting while a delay is pending supersedes it (no queuing).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== DelayTimer ==========================================================

/// Countdown decremented by caller-supplied elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelayTimer {
    remaining: Option<Duration>,
}

impl DelayTimer {
    /// Creates an idle timer.
    pub fn new() -> Self {
        Self { remaining: None }
    }

    /// Starts a countdown, replacing any pending one.
    pub fn start(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    /// Drops the pending countdown without firing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Advances the countdown.
    ///
    /// Returns `true` exactly once, on the tick where the remaining time
    /// reaches zero. Overshoot is discarded.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed);
        if remaining.is_zero() {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }

    /// Returns `true` while a countdown is pending.
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left before the pending countdown fires.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
