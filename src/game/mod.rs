//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies: the grid, the snake and food entities, and the engine
//! that advances them one tick at a time.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::{GameConfig, Rgb, Theme};
pub use direction::Direction;
pub use engine::{CollisionType, GameEngine, GameState, TickOutcome};
pub use food::Food;
pub use grid::{Grid, Position};
pub use snake::{MoveOutcome, Snake};
