//! Core Elm Architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Raw messages and their translation into domain messages
//! - Application state and the update function
//! - Commands and their execution

pub mod action;
pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
