use serde::{Deserialize, Serialize};

/// Messages for the navbar search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMsg {
    Start,
    Insert(char),
    DeleteBackward,
    Finish,
    Clear,
}
