use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridsnake::game::GameConfig;
use gridsnake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Terminal snake on a fixed grid")]
struct Cli {
    /// Play field width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Play field height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Grid cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Game speed in ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Path to a JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open config file {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the TUI on stdout stays clean;
    // off unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config()?;
    let grid = config.grid();
    tracing::info!(
        grid_width = grid.width,
        grid_height = grid.height,
        tick_rate = config.tick_rate,
        "starting game"
    );

    let mut play_mode = PlayMode::new(&config);
    play_mode.run().await?;

    Ok(())
}
