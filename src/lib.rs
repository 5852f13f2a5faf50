//! Mastermind - Terminal Code-Breaking Game Library
//!
//! This module exposes the game logic for testing and external use.

pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod session;

// Terminal rendering; only the top-level draw function is public
mod ui;

pub use ui::draw_ui;
