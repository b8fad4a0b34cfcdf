//! Selection state for the product list
//!
//! Messages are named in past tense ("what happened"); `update` is the only
//! way the selection changes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A specific row was selected
    ItemSelected(usize),
    SelectionCleared,
    /// Moved one row up; selects the first row when nothing is selected
    PreviousItemSelected,
    /// Moved one row down in a list of `len` rows
    NextItemSelected { len: usize },
    /// The list was replaced by one holding `len` rows
    ListResized { len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected_index: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_selected(&self) -> bool {
        self.selected_index.is_some()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ItemSelected(index) => {
                self.selected_index = Some(index);
            }
            Message::SelectionCleared => {
                self.selected_index = None;
            }
            Message::PreviousItemSelected => {
                self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
            }
            Message::NextItemSelected { len } => match self.selected_index {
                Some(index) if index + 1 < len => {
                    self.selected_index = Some(index + 1);
                }
                None if len > 0 => {
                    self.selected_index = Some(0);
                }
                _ => {}
            },
            Message::ListResized { len } => {
                self.selected_index = match self.selected_index {
                    _ if len == 0 => None,
                    Some(index) => Some(index.min(len - 1)),
                    None => None,
                };
            }
        }
    }
}
