mod cell;
mod grid;
mod rules;
pub mod pattern;
mod engine;

pub use cell::Cell;
pub use grid::{Grid, PARALLEL_THRESHOLD};
pub use rules::{Rule, ConwayRule, RuleFn, default_rule};
pub use pattern::{Pattern, PatternError};
pub use engine::{GridEngine, FILL_FACTOR};
