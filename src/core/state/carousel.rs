use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::core::{cmd::Cmd, msg::carousel::CarouselMsg};
use crate::domain::scheduler::Scheduler;
use crate::domain::slide::SlideSet;
use crate::model::slide_controller::{Message as SlideMessage, Playback, SlideController};

/// Home page carousel: the slides it shows and the controller while mounted
pub struct CarouselState {
    controller: Option<SlideController>,
    slides: SlideSet,
    scheduler: Rc<dyn Scheduler>,
    interval: Duration,
    /// Whether the pointer is over the carousel
    pub hovered: bool,
}

impl CarouselState {
    /// Build a carousel over `slides`. Nothing is scheduled until [`Self::mount`].
    pub fn new(slides: SlideSet, scheduler: Rc<dyn Scheduler>, interval: Duration) -> Self {
        Self {
            controller: None,
            slides,
            scheduler,
            interval,
            hovered: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller(&self) -> Option<&SlideController> {
        self.controller.as_ref()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn playback(&self) -> Option<Playback> {
        self.controller.as_ref().map(SlideController::playback)
    }

    /// Create a fresh controller at slide 0 with auto-advance running.
    /// Mounting twice keeps the existing controller.
    pub fn mount(&mut self) {
        if self.controller.is_some() {
            return;
        }
        tracing::debug!("mounting carousel with {} slides", self.slides.len());
        self.controller = Some(SlideController::with_interval(
            self.slides.clone(),
            Rc::clone(&self.scheduler),
            self.interval,
        ));
    }

    pub fn unmount(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            controller.update(SlideMessage::Unmounted);
            tracing::debug!("carousel unmounted at slide {}", controller.current_index());
        }
        self.hovered = false;
    }

    pub fn update(&mut self, msg: CarouselMsg) -> Vec<Cmd> {
        let Some(controller) = self.controller.as_mut() else {
            tracing::debug!("carousel not mounted, ignoring {msg:?}");
            return vec![];
        };

        match msg {
            CarouselMsg::Next => controller.update(SlideMessage::NextRequested),
            CarouselMsg::Previous => controller.update(SlideMessage::PreviousRequested),
            CarouselMsg::GoTo(index) => controller.update(SlideMessage::SlideRequested(index)),
            CarouselMsg::PointerEntered => {
                if self.hovered {
                    return vec![];
                }
                self.hovered = true;
                controller.update(SlideMessage::PointerEntered);
            }
            CarouselMsg::PointerLeft => {
                if !self.hovered {
                    return vec![];
                }
                self.hovered = false;
                controller.update(SlideMessage::PointerLeft);
            }
            CarouselMsg::ToggleAutoAdvance => {
                let message = if controller.is_running() {
                    controller.pause();
                    "auto-advance paused"
                } else {
                    controller.resume();
                    "auto-advance resumed"
                };
                return vec![Cmd::log_info(message), Cmd::RequestRender];
            }
            CarouselMsg::TimerFired(id) => {
                if !controller.tick(id) {
                    return vec![];
                }
            }
        }
        vec![Cmd::RequestRender]
    }
}

impl Drop for CarouselState {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for CarouselState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselState")
            .field("controller", &self.controller)
            .field("slides", &self.slides.len())
            .field("interval", &self.interval)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}
