//! Infrastructure layer
//!
//! External integrations:
//! - TUI foundation (real terminal and a test backend)
//! - CLI argument processing and configuration
//! - Catalog loading
//! - Timer scheduling for the carousel

pub mod catalog_loader;
pub mod cli;
pub mod config;
pub mod scheduler;
pub mod tui;
