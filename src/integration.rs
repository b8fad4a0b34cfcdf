//! Integration layer
//!
//! Connects the core update loop to the terminal:
//! - [`runtime::Runtime`] owns the state and message queues
//! - [`app_runner::AppRunner`] feeds it terminal events and timer ticks and renders

pub mod app_runner;
pub mod runtime;
