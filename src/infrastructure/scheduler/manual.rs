use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::domain::scheduler::{clamp_period, Scheduler, TimerHandle, TimerId};

#[derive(Debug, Clone, Copy)]
struct Entry {
    every: Duration,
    next_due: Duration,
}

#[derive(Debug, Default)]
struct Inner {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Entry>,
}

/// Simulated clock implementing [`Scheduler`].
///
/// Clones share the same timeline, so a test can hand one clone to the code
/// under test and keep another to drive time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<Inner>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn active_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.borrow().timers.contains_key(&id)
    }

    /// Move time forward by `by` and return every tick that came due, in firing order.
    ///
    /// A timer whose period fits several times into `by` fires several times.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut inner = self.inner.borrow_mut();
        let target = inner.now + by;
        let mut fired = Vec::new();

        loop {
            let due = inner
                .timers
                .iter()
                .filter(|(_, entry)| entry.next_due <= target)
                .min_by_key(|(id, entry)| (entry.next_due, **id))
                .map(|(id, entry)| (*id, entry.next_due));
            let Some((id, at)) = due else {
                break;
            };
            inner.now = at;
            if let Some(entry) = inner.timers.get_mut(&id) {
                entry.next_due += entry.every;
            }
            fired.push(id);
        }

        inner.now = target;
        fired
    }
}

impl Scheduler for ManualClock {
    fn schedule_repeating(&self, every: Duration) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = TimerId::new(inner.next_id);
        let every = clamp_period(every);
        let next_due = inner.now + every;
        inner.timers.insert(id, Entry { every, next_due });
        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.inner.borrow_mut().timers.remove(&handle.id());
    }
}
