// Domain layer - grid engine, rules, pattern files
pub mod domain;

// Application layer - configuration, timer and command queue
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridEngine, Pattern, PatternError, Rule, ConwayRule};
pub use application::{Command, Config, GameState, Speed};
pub use rendering::{BoardLayout, Palette};
