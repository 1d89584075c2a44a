use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Visible board size in cells; a hidden one-cell ring always surrounds it.
pub const DEFAULT_BOARD_SIZE: u32 = 128;
pub const MIN_BOARD_SIZE: u32 = 32;

/// Cell size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 5;
pub const MIN_CELL_SIZE: u32 = 1;

/// Gap between cells in pixels
pub const DEFAULT_CELL_GAP: u32 = 1;
pub const MAX_CELL_GAP: u32 = 3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File {} does not exist!", .0.display())]
    MissingPattern(PathBuf),
}

/// Command-line configuration. Range violations are rejected by clap
/// with a diagnostic and a non-zero exit status.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pctlife", version, about = "Conway's Game of Life")]
pub struct Config {
    /// Board size in cells
    #[arg(
        short = 'b',
        long,
        default_value_t = DEFAULT_BOARD_SIZE,
        value_parser = clap::value_parser!(u32).range(MIN_BOARD_SIZE as i64..)
    )]
    pub board_size: u32,

    /// Size of each cell in pixels
    #[arg(
        short = 's',
        long,
        default_value_t = DEFAULT_CELL_SIZE,
        value_parser = clap::value_parser!(u32).range(MIN_CELL_SIZE as i64..)
    )]
    pub cell_size: u32,

    /// Gap between cells in pixels
    #[arg(
        short = 'g',
        long,
        default_value_t = DEFAULT_CELL_GAP,
        value_parser = clap::value_parser!(u32).range(0..=MAX_CELL_GAP as i64)
    )]
    pub cell_gap: u32,

    /// Life 1.05 pattern to start from instead of a random board
    pub pattern: Option<PathBuf>,
}

impl Config {
    /// Checks clap cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.pattern {
            Some(path) if !path.exists() => Err(ConfigError::MissingPattern(path.clone())),
            _ => Ok(()),
        }
    }

    /// Side of the drawn board in pixels
    pub fn board_pixels(&self) -> u32 {
        self.board_size * (self.cell_size + self.cell_gap)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            cell_gap: DEFAULT_CELL_GAP,
            pattern: None,
        }
    }
}
