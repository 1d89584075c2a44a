use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;
use tracing::{info, trace};

use super::pattern::{self, Pattern, PatternError};
use super::{Cell, Grid, Rule, default_rule};

/// Probability that a cell starts alive after [`GridEngine::randomize`]
pub const FILL_FACTOR: f64 = 0.15;

/// GridEngine owns the board and is the only thing that mutates it.
///
/// Every mutation ends by refreshing the liveness view, so renderers can
/// read [`GridEngine::is_alive`] without knowing about the padding ring.
pub struct GridEngine {
    grid: Grid,
    rule: Box<dyn Rule>,
    /// Logical `size * size` view, row-major
    liveness: Vec<bool>,
    generation: u64,
}

impl GridEngine {
    /// Create an all-dead board running Conway's rule.
    /// `size` is expected to have been validated by the caller.
    pub fn new(size: usize) -> Self {
        Self::with_rule(size, default_rule())
    }

    pub fn with_rule(size: usize, rule: Box<dyn Rule>) -> Self {
        Self {
            grid: Grid::new(size),
            rule,
            liveness: vec![false; size * size],
            generation: 0,
        }
    }

    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    /// Centre cell used as the origin for pattern offsets
    pub const fn board_mid(&self) -> usize {
        self.grid.size() / 2
    }

    /// Generations advanced since the board was last seeded
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of live cells on the logical board
    pub fn population(&self) -> usize {
        self.liveness.iter().filter(|&&alive| alive).count()
    }

    /// Liveness of a logical cell; anything off the board is dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        let size = self.size();
        x < size && y < size && self.liveness[y * size + x]
    }

    /// Reseed from the thread-local generator.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Reseed: every logical cell is alive with probability [`FILL_FACTOR`].
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        self.grid.clear();
        let size = self.size();
        for y in 0..size {
            for x in 0..size {
                self.grid.set(x, y, Cell::from(rng.random_bool(FILL_FACTOR)));
            }
        }
        self.generation = 0;
        self.refresh_liveness();
        info!(size, population = self.population(), "randomized board");
    }

    /// Parse a Life 1.05 stream and seed the board from it.
    ///
    /// The board only changes once the whole stream has parsed and every
    /// cell fits; on error the previous generation is left as it was.
    pub fn load_pattern<R: BufRead>(&mut self, name: &str, reader: R) -> pattern::Result<()> {
        let pattern = Pattern::parse(name, reader)?;
        self.apply_pattern(&pattern)
    }

    pub fn load_pattern_file(&mut self, path: impl AsRef<Path>) -> pattern::Result<()> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| PatternError::Io {
            name: name.clone(),
            source,
        })?;
        self.load_pattern(&name, BufReader::new(file))
    }

    /// Clear the board and place an already parsed pattern around the centre.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> pattern::Result<()> {
        let placements = pattern.placements(self.size())?;

        self.grid.clear();
        for &(x, y) in &placements {
            self.grid.set(x, y, Cell::Alive);
        }
        self.generation = 0;
        self.refresh_liveness();

        info!(
            name = %pattern.name,
            cells = placements.len(),
            "loaded pattern"
        );
        Ok(())
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        self.grid.step(self.rule.as_ref());
        self.generation += 1;
        self.refresh_liveness();
        trace!(generation = self.generation, "advanced");
    }

    fn refresh_liveness(&mut self) {
        let size = self.size();
        for (x, y, cell) in self.grid.iter_cells() {
            self.liveness[y * size + x] = cell.is_alive();
        }
    }
}
