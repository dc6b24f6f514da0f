use crate::grid::Cell;
use crate::rng::{self, RandomSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    /// Drops food on a random cell outside `occupied`.
    pub fn spawn<R: RandomSource + ?Sized>(occupied: &[Cell], rng: &mut R) -> Self {
        let cell = rng::pick_free_cell(rng, |c| occupied.contains(&c)).unwrap_or_else(Cell::center);
        Self { cell }
    }

    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Moves to a new free cell. With no free cell left the food stays put
    /// and `false` is returned.
    pub fn respawn<R: RandomSource + ?Sized>(&mut self, occupied: &[Cell], rng: &mut R) -> bool {
        match rng::pick_free_cell(rng, |c| occupied.contains(&c)) {
            Some(cell) => {
                self.cell = cell;
                true
            }
            None => false,
        }
    }
}
