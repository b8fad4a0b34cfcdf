use serde::{Deserialize, Serialize};
use strum::Display;

/// User intents that keybindings resolve to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Quit,
    NextSlide,
    PreviousSlide,
    GoToSlide(isize),
    ToggleAutoAdvance,
    ScrollUp,
    ScrollDown,
    ToggleFocus,
    OpenSelected,
    StartSearch,
    ClearSearch,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_action_deserialize_unit_and_newtype() -> color_eyre::Result<()> {
        let next: Action = json5::from_str(r#""NextSlide""#)?;
        let jump: Action = json5::from_str(r#"{ "GoToSlide": 2 }"#)?;
        assert_eq!(next, Action::NextSlide);
        assert_eq!(jump, Action::GoToSlide(2));
        Ok(())
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::ToggleAutoAdvance.to_string(), "ToggleAutoAdvance");
    }
}
