use super::Cell;

/// Policy deciding a cell's next state from its current state and
/// live neighbour count. Injected into the engine at construction so
/// other automata can be plugged in without touching the step code.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "B3/S23"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Adapter turning a plain function into a [`Rule`].
#[derive(Clone, Copy)]
pub struct RuleFn {
    pub name: &'static str,
    pub evolve: fn(Cell, u8) -> Cell,
}

impl RuleFn {
    pub const fn new(name: &'static str, evolve: fn(Cell, u8) -> Cell) -> Self {
        Self { name, evolve }
    }
}

impl Rule for RuleFn {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        (self.evolve)(current, neighbors)
    }
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
