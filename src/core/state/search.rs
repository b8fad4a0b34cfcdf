use crate::core::{cmd::Cmd, msg::search::SearchMsg};

/// Navbar search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Keystrokes go to the query while editing
    pub editing: bool,
}

impl SearchState {
    /// Any typed text, whitespace included, hides the carousel
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn update(&mut self, msg: SearchMsg) -> Vec<Cmd> {
        match msg {
            SearchMsg::Start => {
                self.editing = true;
            }
            SearchMsg::Insert(c) => {
                if !self.editing {
                    return vec![];
                }
                self.query.push(c);
            }
            SearchMsg::DeleteBackward => {
                if self.query.pop().is_none() {
                    return vec![];
                }
            }
            SearchMsg::Finish => {
                self.editing = false;
            }
            SearchMsg::Clear => {
                self.query.clear();
                self.editing = false;
            }
        }
        vec![Cmd::RequestRender]
    }
}
