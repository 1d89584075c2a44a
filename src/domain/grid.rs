use super::{Cell, rules::Rule};
use rayon::prelude::*;

/// Boards at least this wide sum their interior rows on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 256;

/// Grid stores a square board padded by a one-cell ring on every side.
///
/// Logical cell `(x, y)` lives at padded `(x + 1, y + 1)`. The ring is part
/// of the simulated universe: it feeds the interior sums and evolves under
/// the rule like any other cell, but nothing exists beyond it. Storage is
/// row-major with a stride of `size + 2`.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    stride: usize,
    /// Current generation
    cells: Vec<Cell>,
    /// Neighbour sums for the pending generation
    sums: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all cells (ring included) dead
    pub fn new(size: usize) -> Self {
        let stride = size + 2;
        Self {
            size,
            stride,
            cells: vec![Cell::Dead; stride * stride],
            sums: vec![0; stride * stride],
        }
    }

    /// Logical board width and height
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Padded width and height
    pub const fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    const fn index(&self, px: usize, py: usize) -> usize {
        py * self.stride + px
    }

    /// Get logical cell (None outside the board)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size).then(|| self.cells[self.index(x + 1, y + 1)])
    }

    /// Set logical cell, ignoring coordinates outside the board
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            let idx = self.index(x + 1, y + 1);
            self.cells[idx] = cell;
        }
    }

    /// Get a cell by padded coordinate, ring included
    pub fn padded(&self, px: usize, py: usize) -> Option<Cell> {
        (px < self.stride && py < self.stride).then(|| self.cells[self.index(px, py)])
    }

    /// Set a cell by padded coordinate, ignoring anything past the ring
    pub fn set_padded(&mut self, px: usize, py: usize, cell: Cell) {
        if px < self.stride && py < self.stride {
            let idx = self.index(px, py);
            self.cells[idx] = cell;
        }
    }

    /// Kill every cell, ring included
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Neighbour sums from the last [`Grid::compute_sums`], padded row-major
    pub fn neighbor_sums(&self) -> &[u8] {
        &self.sums
    }

    /// Number of live cells on the logical board
    pub fn population(&self) -> usize {
        self.iter_cells().filter(|(_, _, cell)| cell.is_alive()).count()
    }

    /// Advance one generation: every sum is computed from the current
    /// generation before any cell is rewritten.
    pub fn step(&mut self, rule: &dyn Rule) {
        self.compute_sums();
        self.apply_rule(rule);
    }

    /// Phase one: refill the scratch array from the current generation.
    pub fn compute_sums(&mut self) {
        self.fill_sums(self.size >= PARALLEL_THRESHOLD);
    }

    fn fill_sums(&mut self, parallel: bool) {
        self.sum_interior(parallel);
        self.sum_edges();
        self.sum_corners();
    }

    /// Direct 8-term sums for padded rows and columns `1..=size`.
    fn sum_interior(&mut self, parallel: bool) {
        let stride = self.stride;
        let cells = &self.cells;
        let interior = &mut self.sums[stride..(self.size + 1) * stride];

        let sum_row = |(row, out): (usize, &mut [u8])| {
            let py = row + 1;
            sum_interior_row(
                &cells[(py - 1) * stride..py * stride],
                &cells[py * stride..(py + 1) * stride],
                &cells[(py + 1) * stride..(py + 2) * stride],
                out,
            );
        };

        if parallel {
            interior.par_chunks_mut(stride).enumerate().for_each(sum_row);
        } else {
            interior.chunks_mut(stride).enumerate().for_each(sum_row);
        }
    }

    /// Ring edges only see five stored neighbours.
    fn sum_edges(&mut self) {
        let (s, stride) = (self.size, self.stride);
        let cells = &self.cells;
        let w = |px: usize, py: usize| cells[py * stride + px].weight();
        let last = s + 1;

        for i in 1..=s {
            // top and bottom rows
            self.sums[i] = w(i - 1, 0) + w(i + 1, 0) + w(i - 1, 1) + w(i, 1) + w(i + 1, 1);
            self.sums[last * stride + i] = w(i - 1, last)
                + w(i + 1, last)
                + w(i - 1, s)
                + w(i, s)
                + w(i + 1, s);
            // left and right columns
            self.sums[i * stride] = w(0, i - 1) + w(0, i + 1) + w(1, i - 1) + w(1, i) + w(1, i + 1);
            self.sums[i * stride + last] = w(last, i - 1)
                + w(last, i + 1)
                + w(s, i - 1)
                + w(s, i)
                + w(s, i + 1);
        }
    }

    /// Ring corners only see three stored neighbours.
    fn sum_corners(&mut self) {
        let (s, stride) = (self.size, self.stride);
        let cells = &self.cells;
        let w = |px: usize, py: usize| cells[py * stride + px].weight();
        let last = s + 1;

        self.sums[0] = w(1, 0) + w(0, 1) + w(1, 1);
        self.sums[last] = w(s, 0) + w(s, 1) + w(last, 1);
        self.sums[last * stride] = w(0, s) + w(1, s) + w(1, last);
        self.sums[last * stride + last] = w(s, last) + w(last, s) + w(s, s);
    }

    /// Phase two: apply the rule to every stored cell using only the
    /// scratch sums.
    pub fn apply_rule(&mut self, rule: &dyn Rule) {
        for (cell, &neighbors) in self.cells.iter_mut().zip(&self.sums) {
            *cell = rule.evolve(*cell, neighbors);
        }
    }

    /// Iterate over all logical cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x + 1, y + 1)]))
    }
}

/// Sum the eight neighbours of every cell in `1..len-1` of one padded row.
#[inline]
fn sum_interior_row(above: &[Cell], here: &[Cell], below: &[Cell], out: &mut [u8]) {
    for px in 1..out.len() - 1 {
        out[px] = above[px - 1].weight()
            + above[px].weight()
            + above[px + 1].weight()
            + here[px - 1].weight()
            + here[px + 1].weight()
            + below[px - 1].weight()
            + below[px].weight()
            + below[px + 1].weight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConwayRule;
    use proptest::prelude::*;

    fn grid_with(size: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, c)| c.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Bounds-checked count over the padded array, used as an oracle.
    fn reference_sum(grid: &Grid, px: usize, py: usize) -> u8 {
        let n = grid.stride() as isize;
        let mut total = 0;
        for dy in -1..=1isize {
            for dx in -1..=1isize {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (px as isize + dx, py as isize + dy);
                if (0..n).contains(&nx) && (0..n).contains(&ny) {
                    total += grid.padded(nx as usize, ny as usize).unwrap().weight();
                }
            }
        }
        total
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(8);
        assert_eq!(grid.stride(), 10);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(8, 0), None);
    }

    #[test]
    fn test_full_grid_sums_by_region() {
        let size = 6;
        let mut grid = Grid::new(size);
        for py in 0..size + 2 {
            for px in 0..size + 2 {
                grid.set_padded(px, py, Cell::Alive);
            }
        }
        grid.compute_sums();
        let sums = grid.neighbor_sums();
        let stride = grid.stride();
        let last = size + 1;

        for &(px, py) in &[(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(sums[py * stride + px], 3, "corner ({px}, {py})");
        }
        for i in 1..=size {
            assert_eq!(sums[i], 5);
            assert_eq!(sums[last * stride + i], 5);
            assert_eq!(sums[i * stride], 5);
            assert_eq!(sums[i * stride + last], 5);
        }
        for py in 1..=size {
            for px in 1..=size {
                assert_eq!(sums[py * stride + px], 8);
            }
        }
    }

    #[test]
    fn test_ring_corner_born_from_its_three_neighbours() {
        let mut grid = Grid::new(4);
        grid.set_padded(1, 0, Cell::Alive);
        grid.set_padded(0, 1, Cell::Alive);
        grid.set_padded(1, 1, Cell::Alive);
        grid.step(&ConwayRule);
        assert_eq!(grid.padded(0, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_logical_corner_survives_full_board() {
        // Ring dead, every logical cell alive: logical corners have three
        // live neighbours, edges five and the rest eight.
        let size = 5;
        let all: Vec<_> = (0..size).flat_map(|y| (0..size).map(move |x| (x, y))).collect();
        let mut grid = grid_with(size, &all);
        grid.step(&ConwayRule);
        assert_eq!(alive_cells(&grid), vec![(0, 0), (4, 0), (0, 4), (4, 4)]);
    }

    #[test]
    fn test_blinker_is_simultaneous() {
        // A row-major in-place sweep would give birth to (2, 1) first, and
        // (1, 2) would count it as a second neighbour and survive.
        let mut grid = grid_with(5, &[(1, 2), (2, 2), (3, 2)]);
        grid.step(&ConwayRule);
        assert_eq!(alive_cells(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_parallel_and_serial_sums_agree() {
        let mut serial = Grid::new(20);
        for i in 0..20 {
            serial.set(i, (i * 7) % 20, Cell::Alive);
            serial.set((i * 3) % 20, i, Cell::Alive);
        }
        let mut parallel = serial.clone();
        serial.fill_sums(false);
        parallel.fill_sums(true);
        assert_eq!(serial.neighbor_sums(), parallel.neighbor_sums());
    }

    proptest! {
        #[test]
        fn prop_sums_match_bounded_count(
            size in 1usize..10,
            bits in proptest::collection::vec(any::<bool>(), 144),
        ) {
            let mut grid = Grid::new(size);
            let stride = grid.stride();
            for py in 0..stride {
                for px in 0..stride {
                    grid.set_padded(px, py, Cell::from(bits[py * stride + px]));
                }
            }
            grid.compute_sums();
            for py in 0..stride {
                for px in 0..stride {
                    prop_assert_eq!(
                        grid.neighbor_sums()[py * stride + px],
                        reference_sum(&grid, px, py)
                    );
                }
            }
        }
    }
}
