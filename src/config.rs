use std::{path::PathBuf, time::Duration};

use anyhow::{ensure, Result};
use clap::Parser;

use crate::grid::Grid;

/// Startup parameters. Defaults give a 60x40 field with 100 items and a
/// 100ms tick.
#[derive(Debug, Clone, Parser)]
#[command(name = "snake-tick")]
#[command(about = "Terminal snake: eat the O's, avoid the walls and yourself")]
pub struct Config {
    /// Grid width; the border sits on columns 0 and `width`
    #[arg(long, default_value_t = 60)]
    pub width: i32,
    /// Grid height; the border sits on rows 0 and `height`
    #[arg(long, default_value_t = 40)]
    pub height: i32,
    /// Number of items scattered at start
    #[arg(long, default_value_t = 100)]
    pub items: usize,
    /// Tick period in milliseconds
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
    /// Write logs to this file (RUST_LOG controls the filter)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= 3 && self.height >= 3,
            "grid {}x{} has no interior, both sides must be at least 3",
            self.width,
            self.height
        );
        ensure!(
            self.width <= i32::from(u16::MAX) - 1 && self.height <= i32::from(u16::MAX) - 1,
            "grid {}x{} does not fit a terminal",
            self.width,
            self.height
        );
        ensure!(self.tick_ms > 0, "tick period must be positive");
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
