//! Self-contained UI models
//!
//! Each model owns its state and changes only through `update(Message)` or the
//! equivalent operation methods. Models know nothing about the terminal.

pub mod selection;
pub mod slide_controller;
pub mod status_bar;

pub use selection::Selection;
pub use slide_controller::{Playback, SlideController};
pub use status_bar::StatusBar;
