use std::time::Duration;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// An RGB color value for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used when drawing the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Cleared background
    pub background: Rgb,
    /// Border around the play field
    pub border: Rgb,
    /// Food body
    pub food: Rgb,
    /// Snake body
    pub snake: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            food: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play field width in pixels
    pub screen_width: u32,
    /// Play field height in pixels
    pub screen_height: u32,
    /// Side length of one grid cell, in pixels
    pub cell_size: u32,
    /// Game speed, in ticks per second
    pub tick_rate: u32,
    /// Drawing colors
    pub theme: Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            tick_rate: 10,
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Grid dimensions derived from the pixel sizes
    pub fn grid(&self) -> Grid {
        Grid::new(
            (self.screen_width / self.cell_size) as i32,
            (self.screen_height / self.cell_size) as i32,
        )
    }

    /// Wall-clock time between game ticks.
    ///
    /// Divides on whole nanoseconds, so the result is never zero for
    /// any tick rate `validate()` accepts.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }

    /// Reject configurations the game cannot run on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.cell_size <= self.screen_width && self.cell_size <= self.screen_height,
            "cell size {} does not fit the {}x{} play field",
            self.cell_size,
            self.screen_width,
            self.screen_height
        );
        let grid = self.grid();
        ensure!(
            grid.width >= 2 && grid.height >= 2,
            "grid must be at least 2x2 cells, got {}x{}",
            grid.width,
            grid.height
        );
        ensure!(self.tick_rate > 0, "tick rate must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, 480);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tick_rate, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_grid() {
        let grid = GameConfig::default().grid();
        assert_eq!(grid.width, 32);
        assert_eq!(grid.height, 24);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(
            GameConfig::default().tick_interval(),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_tick_interval_nonzero_at_high_rates() {
        // Millisecond truncation would make this zero, and a zero
        // period panics in tokio::time::interval
        let config = GameConfig {
            tick_rate: 1001,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.tick_interval().is_zero());
        assert_eq!(config.tick_interval(), Duration::from_nanos(999_000));
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let config = GameConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_cell() {
        let config = GameConfig {
            cell_size: 700,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        // 20x20 pixels at cell size 20 is a 1x1 grid
        let config = GameConfig {
            screen_width: 20,
            screen_height: 20,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"tick_rate": 5}"#).unwrap();
        assert_eq!(config.tick_rate, 5);
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.theme, Theme::default());
    }
}
