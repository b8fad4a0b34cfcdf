use serde::{Deserialize, Serialize};

/// Messages for focus and the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ScrollUp,
    ScrollDown,
    ToggleFocus,
    OpenFocused,
}
