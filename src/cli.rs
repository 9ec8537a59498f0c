//! Command-line configuration.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::types::{
    GameConfig, Variant, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_SIDE, MAX_OBSTACLES,
    MIN_GRID_HEIGHT, MIN_GRID_WIDTH,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-snake", version, about = "Snake in the terminal")]
pub struct Args {
    /// Rule set: `arcade` (obstacles, power-ups, levels) or `classic` (restartable)
    #[arg(long, default_value = "arcade", value_parser = parse_variant)]
    pub variant: Variant,

    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: u16,

    /// Override the number of obstacles generated at start
    #[arg(long)]
    pub obstacles: Option<u16>,

    /// RNG seed; random when omitted
    #[arg(long)]
    pub seed: Option<u32>,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    /// Default log level; `RUST_LOG` takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    Variant::from_str(s)
        .ok_or_else(|| format!("unknown variant `{}` (expected arcade or classic)", s))
}

impl Args {
    /// Validate the arguments and build the game configuration.
    pub fn to_config(&self) -> Result<GameConfig> {
        if self.width < MIN_GRID_WIDTH || self.height < MIN_GRID_HEIGHT {
            bail!(
                "grid {}x{} is too small (minimum {}x{})",
                self.width,
                self.height,
                MIN_GRID_WIDTH,
                MIN_GRID_HEIGHT
            );
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            bail!(
                "grid {}x{} is too large (maximum {} per side)",
                self.width,
                self.height,
                MAX_GRID_SIDE
            );
        }

        let mut config = GameConfig::new(self.width, self.height, self.variant);
        if let Some(n) = self.obstacles {
            if !config.rules.obstacles {
                bail!("--obstacles is not available in the {} variant", self.variant.as_str());
            }
            let limit = (config.area() / 4).min(MAX_OBSTACLES);
            if n as usize > limit {
                bail!(
                    "{} obstacles do not fit a {}x{} grid (maximum {})",
                    n,
                    self.width,
                    self.height,
                    limit
                );
            }
            config = config.with_obstacles(n);
        }
        Ok(config)
    }

    /// The requested seed, or a fresh random one.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
