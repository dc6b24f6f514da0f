use macroquad::prelude::{Rect, Vec2, vec2};

pub const TILE_SIZE: i32 = 20;
pub const GRID_WIDTH: i32 = 40;
pub const GRID_HEIGHT: i32 = 30;
pub const SCREEN_WIDTH: i32 = GRID_WIDTH * TILE_SIZE;
pub const SCREEN_HEIGHT: i32 = GRID_HEIGHT * TILE_SIZE;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn center() -> Self {
        Self::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)
    }

    /// Neighbouring cell in `dir`, unclamped. May lie outside the grid.
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_WIDTH && self.y < GRID_HEIGHT
    }

    /// Folds the cell back onto the grid as if its edges were joined.
    pub fn wrapped(self) -> Self {
        Self::new(self.x.rem_euclid(GRID_WIDTH), self.y.rem_euclid(GRID_HEIGHT))
    }

    pub fn pixel_center(self) -> Vec2 {
        let half = TILE_SIZE as f32 / 2.0;
        vec2(
            (self.x * TILE_SIZE) as f32 + half,
            (self.y * TILE_SIZE) as f32 + half,
        )
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            (self.x * TILE_SIZE) as f32,
            (self.y * TILE_SIZE) as f32,
            TILE_SIZE as f32,
            TILE_SIZE as f32,
        )
    }
}

/// Every cell of the grid in row-major order.
pub fn all_cells() -> impl Iterator<Item = Cell> {
    (0..GRID_HEIGHT).flat_map(|y| (0..GRID_WIDTH).map(move |x| Cell::new(x, y)))
}
