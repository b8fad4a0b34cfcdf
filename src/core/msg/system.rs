use serde::{Deserialize, Serialize};

/// Messages specific to SystemState and the status bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Resize(u16, u16),

    UpdateStatusMessage { label: String, message: String },
    ShowError { label: String, message: String },
    ClearStatusMessage,
}
