use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{self, Cell, GRID_HEIGHT, GRID_WIDTH};

/// Random draws after which placement stops guessing and scans the grid.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Uniform random source the simulation draws positions, kinds, velocities
/// and sizes from. Ranges are half-open: `[low, high)`.
pub trait RandomSource {
    fn range_i32(&mut self, low: i32, high: i32) -> i32;

    fn range_f32(&mut self, low: f32, high: f32) -> f32;

    fn index(&mut self, len: usize) -> usize {
        self.range_i32(0, len as i32) as usize
    }

    fn cell(&mut self) -> Cell {
        let x = self.range_i32(0, GRID_WIDTH);
        let y = self.range_i32(0, GRID_HEIGHT);
        Cell::new(x, y)
    }
}

/// A generator with its own state: two sources built from the same seed
/// produce the same sequence no matter what other sources do.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    pub fn seeded(seed: u64) -> Self {
        Self { inner: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRng {
    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..high)
    }

    fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..high)
    }
}

/// Picks a uniformly random cell for which `blocked` is false.
///
/// Tries random cells first, then falls back to choosing among the free
/// cells left on the grid. Returns `None` only when no free cell exists.
pub fn pick_free_cell<R, F>(rng: &mut R, blocked: F) -> Option<Cell>
where
    R: RandomSource + ?Sized,
    F: Fn(Cell) -> bool,
{
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = rng.cell();
        if !blocked(cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = grid::all_cells().filter(|c| !blocked(*c)).collect();
    if free.is_empty() {
        warn!("no free cell left on the grid");
        return None;
    }
    warn!(
        "placement fell back to scanning after {} draws ({} free cells)",
        MAX_PLACEMENT_ATTEMPTS,
        free.len()
    );
    Some(free[rng.index(free.len())])
}
