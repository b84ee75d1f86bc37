#![allow(dead_code)]
//! Countdown tick source
//!
//! A `Ticker` emits one tick per elapsed period while it is running. It is
//! driven by the caller's clock (`poll(now)`) so the event loop can keep a
//! single thread and tests can feed synthetic instants.

use std::time::{Duration, Instant};

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickerState {
    /// Cancelled or never started; no ticks will be emitted
    Idle,
    /// Started but not yet anchored to a clock reading
    Armed,
    /// Anchored; the next tick is due at the given instant
    Running { next_due: Instant },
}

/// Repeating tick source with an explicit cancel.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    state: TickerState,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::every(TICK_PERIOD)
    }
}

impl Ticker {
    /// Create an idle ticker with the given period.
    pub fn every(period: Duration) -> Self {
        Self {
            period,
            state: TickerState::Idle,
        }
    }

    /// Start ticking. The first period begins at the next `poll`.
    pub fn arm(&mut self) {
        self.state = TickerState::Armed;
    }

    /// Stop ticking. Pending periods are discarded.
    pub fn cancel(&mut self) {
        self.state = TickerState::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.state != TickerState::Idle
    }

    /// Count the ticks that have come due by `now` and schedule the next one.
    pub fn poll(&mut self, now: Instant) -> u32 {
        match self.state {
            TickerState::Idle => 0,
            TickerState::Armed => {
                self.state = TickerState::Running {
                    next_due: now + self.period,
                };
                0
            }
            TickerState::Running { mut next_due } => {
                let mut due = 0;
                while next_due <= now {
                    due += 1;
                    next_due += self.period;
                }
                self.state = TickerState::Running { next_due };
                due
            }
        }
    }

    /// Time left until the next tick, for use as an event poll timeout.
    /// An armed ticker reports a zero wait so it gets anchored promptly.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TickerState::Idle => None,
            TickerState::Armed => Some(Duration::ZERO),
            TickerState::Running { next_due } => {
                Some(next_due.checked_duration_since(now).unwrap_or(Duration::ZERO))
            }
        }
    }
}
