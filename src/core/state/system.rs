use ratatui::layout::Rect;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};
use crate::model::status_bar::{Message as StatusBarMessage, StatusBar};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing
    pub viewport: Rect,
    pub status_bar: StatusBar,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage { label, message } => {
                self.status_bar
                    .update(StatusBarMessage::MessageChanged { label, message });
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError { label, message } => {
                let log = Cmd::log_error(format!("{label}: {message}"));
                self.status_bar
                    .update(StatusBarMessage::ErrorMessageChanged { label, message });
                vec![log, Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_bar.update(StatusBarMessage::MessageCleared);
                vec![Cmd::RequestRender]
            }
        }
    }
}
