mod config;
mod game_state;
mod scheduler;

pub use config::{
    Config, ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_CELL_GAP, DEFAULT_CELL_SIZE, MAX_CELL_GAP,
    MIN_BOARD_SIZE, MIN_CELL_SIZE,
};
pub use game_state::{Command, GameState};
pub use scheduler::{INTERVAL, MAX_STEPS_PER_FRAME, Scheduler, Speed};
