use std::collections::VecDeque;

use crate::grid::{Cell, Direction};
use crate::powerup::PowerUpKind;

pub const TRAIL_LEN: usize = 10;
pub const GHOST_DURATION: f64 = 5.0;
pub const DOUBLE_POINTS_DURATION: f64 = 10.0;
pub const FAST_FACTOR: f32 = 2.0;
pub const SLOW_FACTOR: f32 = 0.5;
/// Shrink never cuts the body below this many segments.
pub const MIN_SHRINK_LEN: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Collided,
}

/// Timed and untimed effects picked up from power-ups.
///
/// Ghost and double points carry the timestamp they run out at; the speed
/// factor has no expiry and holds until the next Speed or Slow pickup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Modifiers {
    pub ghost_until: Option<f64>,
    pub double_points_until: Option<f64>,
    pub speed_factor: f32,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            ghost_until: None,
            double_points_until: None,
            speed_factor: 1.0,
        }
    }
}

impl Modifiers {
    pub fn ghost(&self) -> bool {
        self.ghost_until.is_some()
    }

    pub fn double_points(&self) -> bool {
        self.double_points_until.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    grow: bool,
    modifiers: Modifiers,
    trail: VecDeque<Cell>,
}

impl Snake {
    /// A single segment at `start`.
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self::with_body(vec![start], direction)
    }

    /// Builds a snake from explicit segments, head first. An empty body is
    /// replaced by a single segment at the grid centre.
    pub fn with_body(body: Vec<Cell>, direction: Direction) -> Self {
        let body = if body.is_empty() { vec![Cell::center()] } else { body };
        Self {
            body,
            direction,
            grow: false,
            modifiers: Modifiers::default(),
            trail: VecDeque::with_capacity(TRAIL_LEN + 1),
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built by `new`; the body always keeps its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Recent head cells, oldest first.
    pub fn trail(&self) -> &VecDeque<Cell> {
        &self.trail
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn is_ghost(&self) -> bool {
        self.modifiers.ghost()
    }

    pub fn has_double_points(&self) -> bool {
        self.modifiers.double_points()
    }

    pub fn speed_factor(&self) -> f32 {
        self.modifiers.speed_factor
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn change_direction(&mut self, dir: Direction) {
        if dir != self.direction.opposite() {
            self.direction = dir;
        }
    }

    /// Next move keeps the tail in place.
    pub fn grow(&mut self) {
        self.grow = true;
    }

    pub fn step(&mut self) -> MoveResult {
        let head = self.head();
        let tentative = head.offset(self.direction);

        self.trail.push_back(head);
        if self.trail.len() > TRAIL_LEN {
            self.trail.pop_front();
        }

        let new_head = if self.is_ghost() {
            tentative.wrapped()
        } else {
            if !tentative.in_bounds() || self.occupies(tentative) {
                return MoveResult::Collided;
            }
            tentative
        };

        self.body.insert(0, new_head);
        if self.grow {
            self.grow = false;
        } else {
            self.body.pop();
        }
        MoveResult::Moved
    }

    pub fn apply_power_up(&mut self, kind: PowerUpKind, now: f64) {
        match kind {
            PowerUpKind::Speed => self.modifiers.speed_factor = FAST_FACTOR,
            PowerUpKind::Slow => self.modifiers.speed_factor = SLOW_FACTOR,
            PowerUpKind::Ghost => self.modifiers.ghost_until = Some(now + GHOST_DURATION),
            PowerUpKind::DoublePoints => {
                self.modifiers.double_points_until = Some(now + DOUBLE_POINTS_DURATION)
            }
            PowerUpKind::Shrink => self.shrink(),
        }
    }

    pub fn tick_modifiers(&mut self, now: f64) {
        if self.modifiers.ghost_until.is_some_and(|t| now > t) {
            self.modifiers.ghost_until = None;
        }
        if self.modifiers.double_points_until.is_some_and(|t| now > t) {
            self.modifiers.double_points_until = None;
        }
    }

    fn shrink(&mut self) {
        if self.body.len() <= MIN_SHRINK_LEN {
            return;
        }
        let keep = (self.body.len() / 2).max(MIN_SHRINK_LEN);
        self.body.truncate(keep);
    }
}
