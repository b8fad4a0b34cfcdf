use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects the update function asks the host to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    /// Request a render; coalesced by the app runner
    RequestRender,

    LogError { message: String },
    LogInfo { message: String },

    Batch(Vec<Cmd>),

    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn log_error(message: impl Into<String>) -> Cmd {
        Cmd::LogError {
            message: message.into(),
        }
    }
}
