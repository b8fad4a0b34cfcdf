//! # Storefront - terminal storefront home page
//!
//! A terminal storefront built with Ratatui: a navbar with search, an
//! auto-advancing product carousel and a product list.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, including the carousel's
//!   [`model::SlideController`]
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): applies a message and returns commands
//! - **Command** (`core::cmd`): side effects (resize, render requests, logging)
//! - **View** (`presentation`): rendering based on the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use storefront::domain::slide::SlideSet;
//! use storefront::infrastructure::scheduler::ManualClock;
//! use storefront::model::SlideController;
//!
//! let clock = ManualClock::new();
//! let mut carousel = SlideController::new(SlideSet::default(), Rc::new(clock.clone()));
//!
//! carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//!
//! for id in clock.advance(Duration::from_millis(5000)) {
//!     carousel.tick(id);
//! }
//! assert_eq!(carousel.current_index(), 2);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
