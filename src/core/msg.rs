use serde::{Deserialize, Serialize};

pub mod carousel;
pub mod search;
pub mod system;
pub mod ui;

use carousel::CarouselMsg;
use search::SearchMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and never touch the terminal directly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Carousel(CarouselMsg),
    Search(SearchMsg),
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Carousel(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheduler::TimerId;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Carousel(CarouselMsg::TimerFired(TimerId::new(1))).is_frequent());
        assert!(!Msg::Carousel(CarouselMsg::Next).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Ui(UiMsg::OpenFocused).is_frequent());
    }

    #[test]
    fn test_msg_serialization() -> color_eyre::Result<()> {
        let msg = Msg::Search(SearchMsg::Insert('x'));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
