//! Carousel slide controller
//!
//! Owns the current slide index and at most one auto-advance timer.
//!
//! ```text
//!            pause()                       dispose()
//!  Running ----------> Paused   Running ------------> Disposed
//!     ^  \  <----------  |                  Paused ---^
//!     |   \   resume()   |
//!     +----+ next/previous/go_to/resume restart the timer
//! ```
//!
//! Navigation from any live state leaves the controller Running with a fresh
//! full interval. Ticks advance the index without touching the timer.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::domain::scheduler::{Scheduler, TimerHandle, TimerId};
use crate::domain::slide::{Slide, SlideSet};

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

/// Messages understood by [`SlideController::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NextRequested,
    PreviousRequested,
    /// Jump to a slide; out-of-range indices wrap to the nearest end
    SlideRequested(isize),
    PointerEntered,
    PointerLeft,
    TimerFired(TimerId),
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Running,
    Paused,
    Disposed,
}

pub struct SlideController {
    slides: SlideSet,
    current_index: usize,
    interval: Duration,
    timer: Option<TimerHandle>,
    disposed: bool,
    scheduler: Rc<dyn Scheduler>,
}

impl SlideController {
    /// Mount a controller over `slides`. Auto-advance starts immediately.
    pub fn new(slides: SlideSet, scheduler: Rc<dyn Scheduler>) -> Self {
        Self::with_interval(slides, scheduler, AUTO_ADVANCE_INTERVAL)
    }

    pub fn with_interval(slides: SlideSet, scheduler: Rc<dyn Scheduler>, interval: Duration) -> Self {
        let mut controller = Self {
            slides,
            current_index: 0,
            interval,
            timer: None,
            disposed: false,
            scheduler,
        };
        controller.restart_timer();
        controller
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        // current_index < len and len >= 1 are upheld by every mutation
        &self.slides.iter().as_slice()[self.current_index]
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Id of the timer currently owned, if auto-advance is active.
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer.as_ref().map(TimerHandle::id)
    }

    pub fn playback(&self) -> Playback {
        if self.disposed {
            Playback::Disposed
        } else if self.timer.is_some() {
            Playback::Running
        } else {
            Playback::Paused
        }
    }

    pub fn is_running(&self) -> bool {
        self.playback() == Playback::Running
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NextRequested => self.next(),
            Message::PreviousRequested => self.previous(),
            Message::SlideRequested(index) => self.go_to(index),
            Message::PointerEntered => self.pause(),
            Message::PointerLeft => self.resume(),
            Message::TimerFired(id) => {
                self.tick(id);
            }
            Message::Unmounted => self.dispose(),
        }
    }

    pub fn next(&mut self) {
        if self.ignore_when_disposed("next") {
            return;
        }
        self.current_index = (self.current_index + 1) % self.len();
        self.restart_timer();
    }

    pub fn previous(&mut self) {
        if self.ignore_when_disposed("previous") {
            return;
        }
        let len = self.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.restart_timer();
    }

    pub fn go_to(&mut self, index: isize) {
        if self.ignore_when_disposed("go_to") {
            return;
        }
        let len = self.len();
        self.current_index = match usize::try_from(index) {
            Err(_) => len - 1,
            Ok(index) if index >= len => 0,
            Ok(index) => index,
        };
        self.restart_timer();
    }

    /// Stop auto-advance. Calling it while paused does nothing.
    pub fn pause(&mut self) {
        if self.ignore_when_disposed("pause") {
            return;
        }
        if let Some(handle) = self.timer.take() {
            tracing::debug!("carousel paused at slide {}", self.current_index);
            self.scheduler.cancel(handle);
        }
    }

    /// Start auto-advance with a full fresh interval, replacing any running timer.
    pub fn resume(&mut self) {
        if self.ignore_when_disposed("resume") {
            return;
        }
        self.restart_timer();
    }

    /// Cancel the timer for good. Every later call is ignored.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        if !self.disposed {
            tracing::debug!("carousel disposed");
        }
        self.disposed = true;
    }

    /// Handle one timer firing. Returns whether the slide advanced.
    ///
    /// Ticks from a timer this controller no longer owns are dropped.
    pub fn tick(&mut self, id: TimerId) -> bool {
        if self.disposed || self.timer_id() != Some(id) {
            tracing::trace!("dropping stale tick from {id}");
            return false;
        }
        self.current_index = (self.current_index + 1) % self.len();
        true
    }

    fn restart_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        self.timer = Some(self.scheduler.schedule_repeating(self.interval));
    }

    fn ignore_when_disposed(&self, operation: &str) -> bool {
        if self.disposed {
            tracing::debug!("ignoring {operation} on a disposed carousel");
        }
        self.disposed
    }
}

impl Drop for SlideController {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl fmt::Debug for SlideController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideController")
            .field("slides", &self.slides.len())
            .field("current_index", &self.current_index)
            .field("interval", &self.interval)
            .field("timer", &self.timer_id())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
