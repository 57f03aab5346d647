use std::mem;

use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;

use crate::{Cell, Pattern, UniverseError};

/// Universe owns a fixed-size toroidal grid of cells and advances it one
/// generation at a time under Conway's rules.
///
/// Cells live in a single flat buffer in row-major order (`y * width + x`)
/// so the whole grid can be handed to a host as one contiguous byte slice.
/// Stepping is double-buffered: every next state is computed from the
/// previous generation only, then the buffers are swapped. In-place updates
/// would let later cells observe already-evolved neighbors.
pub struct Universe {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl Universe {
    /// Create a new universe with all cells initially dead.
    ///
    /// Fails if either dimension is zero or `width * height` overflows the
    /// addressable index range.
    pub fn new(width: usize, height: usize) -> Result<Self, UniverseError> {
        if width == 0 || height == 0 {
            return Err(UniverseError::ZeroDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(UniverseError::DimensionOverflow { width, height })?;

        debug!("created {width}x{height} universe");
        Ok(Self {
            width,
            height,
            generation: 0,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of generations advanced since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), UniverseError> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(UniverseError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Advance the automaton by exactly one generation.
    ///
    /// Reads only the previous generation's buffer, writes the scratch
    /// buffer, then swaps. Pure: identical grids always evolve identically.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        let cells = &self.cells;

        for (idx, slot) in self.next.iter_mut().enumerate() {
            let (x, y) = (idx % width, idx / width);
            let neighbors = live_neighbors(cells, width, height, x, y);
            *slot = cells[idx].evolve(neighbors);
        }

        mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
    }

    /// Row-parallel tick using rayon for large grids.
    ///
    /// Observably identical to `tick`: neighbor counts still come entirely
    /// from the previous buffer and the swap happens after all rows finish.
    pub fn tick_parallel(&mut self) {
        let (width, height) = (self.width, self.height);
        let cells = &self.cells;

        self.next
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    let neighbors = live_neighbors(cells, width, height, x, y);
                    *slot = cells[y * width + x].evolve(neighbors);
                }
            });

        mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
        trace!("advanced to generation {} (parallel)", self.generation);
    }

    /// Flip the state of the cell at `(x, y)`
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), UniverseError> {
        self.check_bounds(x, y)?;
        let idx = self.get_index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Set every cell to dead; the generation counter is untouched
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Randomize the grid from a caller-supplied randomness source.
    ///
    /// Each cell is independently alive with probability 0.3. The engine
    /// owns no RNG state, so seeded sources reproduce exact grids.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }

    /// Set every listed coordinate to alive.
    ///
    /// All coordinates are validated up front: an out-of-range entry fails
    /// the whole call without writing anything.
    pub fn set_cells(&mut self, alive: &[(usize, usize)]) -> Result<(), UniverseError> {
        for &(x, y) in alive {
            self.check_bounds(x, y)?;
        }
        for &(x, y) in alive {
            let idx = self.get_index(x, y);
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Stamp a pattern onto the grid, anchored at `(origin_x, origin_y)`.
    ///
    /// Additive: the pattern's cells are set alive, everything else is left
    /// untouched. Offsets that cross an edge wrap toroidally. The origin
    /// itself must lie inside the grid.
    pub fn insert_pattern(
        &mut self,
        pattern: &Pattern,
        origin_x: usize,
        origin_y: usize,
    ) -> Result<(), UniverseError> {
        self.check_bounds(origin_x, origin_y)?;
        for &(dx, dy) in &pattern.cells {
            let x = (origin_x + dx) % self.width;
            let y = (origin_y + dy) % self.height;
            let idx = self.get_index(x, y);
            self.cells[idx] = Cell::Alive;
        }
        debug!(
            "stamped {} at ({origin_x}, {origin_y})",
            pattern.name
        );
        Ok(())
    }

    /// Zero-copy view of the current grid, one byte per cell (0 = dead,
    /// 1 = alive), row-major.
    ///
    /// The borrow ties the view to the universe: any mutating call requires
    /// re-fetching the snapshot.
    pub fn snapshot(&self) -> &[u8] {
        // Cell is repr(u8) with Dead = 0 and Alive = 1, so the cell buffer
        // is already a valid byte buffer.
        unsafe { std::slice::from_raw_parts(self.cells.as_ptr().cast::<u8>(), self.cells.len()) }
    }
}

/// Count live neighbors of `(x, y)` with toroidal wrapping on both axes
fn live_neighbors(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let w = width as i64;
    let h = height as i64;

    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter(|&(dx, dy)| {
            let nx = ((x as i64 + dx) % w + w) % w;
            let ny = ((y as i64 + dy) % h + h) % h;
            cells[ny as usize * width + nx as usize].is_alive()
        })
        .count() as u8
}
