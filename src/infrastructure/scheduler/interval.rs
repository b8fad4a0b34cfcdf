use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;
use crate::domain::scheduler::{clamp_period, Scheduler, TimerHandle, TimerId};

/// Scheduler backed by tokio interval tasks.
///
/// Every timer is a spawned task that posts [`RawMsg::CarouselTick`] into the
/// runtime's raw message channel. Cancelling trips the task's token; a tick
/// that was already queued is still delivered, so receivers must compare the
/// id against the handle they currently own.
#[derive(Debug)]
pub struct IntervalScheduler {
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    next_id: Cell<u64>,
    tokens: RefCell<HashMap<TimerId, CancellationToken>>,
}

impl IntervalScheduler {
    pub fn new(raw_msg_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_msg_tx,
            next_id: Cell::new(0),
            tokens: RefCell::new(HashMap::new()),
        }
    }

    pub fn active_timers(&self) -> usize {
        self.tokens.borrow().len()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(&self, every: Duration) -> TimerHandle {
        let raw = self.next_id.get() + 1;
        self.next_id.set(raw);
        let id = TimerId::new(raw);

        let every = clamp_period(every);
        let token = CancellationToken::new();
        let task_token = token.clone();
        let tx = self.raw_msg_tx.clone();

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + every, every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.send(RawMsg::CarouselTick(id)).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::trace!("{id} stopped");
        });

        self.tokens.borrow_mut().insert(id, token);
        tracing::debug!("{id} scheduled every {every:?}");
        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let id = handle.id();
        if let Some(token) = self.tokens.borrow_mut().remove(&id) {
            token.cancel();
            tracing::debug!("{id} cancelled");
        }
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        for (_, token) in self.tokens.get_mut().drain() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_after_full_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = IntervalScheduler::new(tx);
        let started = Instant::now();

        let handle = scheduler.schedule_repeating(Duration::from_secs(5));
        let msg = rx.recv().await;

        assert_eq!(msg, Some(RawMsg::CarouselTick(handle.id())));
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = IntervalScheduler::new(tx);

        let handle = scheduler.schedule_repeating(Duration::from_secs(5));
        assert_eq!(rx.recv().await, Some(RawMsg::CarouselTick(handle.id())));

        scheduler.cancel(handle);
        assert_eq!(scheduler.active_timers(), 0);

        let next = tokio::time::timeout(Duration::from_secs(60), rx.recv()).await;
        assert!(next.is_err(), "no tick expected after cancel, got {next:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_schedule_gets_fresh_id() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let scheduler = IntervalScheduler::new(tx);

        let first = scheduler.schedule_repeating(Duration::from_secs(1));
        let second = scheduler.schedule_repeating(Duration::from_secs(1));

        assert_ne!(first.id(), second.id());
        assert_eq!(scheduler.active_timers(), 2);
        scheduler.cancel(first);
        scheduler.cancel(second);
        assert_eq!(scheduler.active_timers(), 0);
    }
}
