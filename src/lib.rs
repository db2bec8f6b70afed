//! duskrunner - Terminal Endless Runner Library
//!
//! This module exposes the game core for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod core;
pub mod utils;

pub use crate::core::config::RunnerConfig;
pub use crate::core::session::{GamePhase, GameSession};

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
