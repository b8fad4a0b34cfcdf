use serde::{Deserialize, Serialize};

use crate::domain::scheduler::TimerId;

/// Messages for the home page carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselMsg {
    Next,
    Previous,
    GoTo(isize),
    PointerEntered,
    PointerLeft,
    ToggleAutoAdvance,
    TimerFired(TimerId),
}

impl CarouselMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, CarouselMsg::TimerFired(_))
    }
}
