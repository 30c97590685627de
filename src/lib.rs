//! Grid Snake - a terminal snake game with reset-and-continue rules
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food and the tick engine
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
