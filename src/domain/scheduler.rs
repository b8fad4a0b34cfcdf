//! Host timer abstraction
//!
//! The carousel never touches a clock directly. It asks a [`Scheduler`] for a
//! recurring callback and keeps the returned [`TimerHandle`] until it cancels it.
//! Ticks reach the owner as messages carrying the [`TimerId`], which lets the
//! owner drop ticks from timers it has already cancelled.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Shortest period a scheduler will honour. Zero periods are raised to this.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Exclusive ownership token for one running timer.
///
/// Not `Clone`: whoever holds it is the only party that can cancel the timer.
#[derive(Debug, PartialEq, Eq)]
pub struct TimerHandle {
    id: TimerId,
}

impl TimerHandle {
    pub fn new(id: TimerId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }
}

pub trait Scheduler: fmt::Debug {
    /// Start a timer that fires every `every`, first firing one full period from now.
    fn schedule_repeating(&self, every: Duration) -> TimerHandle;

    /// Stop the timer. Once this returns no tick for `handle` is delivered as live.
    fn cancel(&self, handle: TimerHandle);
}

pub(crate) fn clamp_period(every: Duration) -> Duration {
    every.max(MIN_PERIOD)
}
