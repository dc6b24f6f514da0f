use log::debug;
use macroquad::prelude::Color;

use crate::grid::Cell;
use crate::rng::{self, RandomSource};

/// Seconds an uncollected power-up stays on the board.
pub const POWER_UP_LIFETIME: f64 = 15.0;
pub const SPAWN_DELAY_MIN: f32 = 10.0;
pub const SPAWN_DELAY_MAX: f32 = 20.0;

const GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);
const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
const PURPLE: Color = Color::new(0.5, 0.0, 0.5, 1.0);
const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);
const ORANGE: Color = Color::new(1.0, 0.65, 0.0, 1.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Speed,
    Slow,
    Ghost,
    DoublePoints,
    Shrink,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::Speed,
        PowerUpKind::Slow,
        PowerUpKind::Ghost,
        PowerUpKind::DoublePoints,
        PowerUpKind::Shrink,
    ];

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Speed => GOLD,
            PowerUpKind::Slow => CYAN,
            PowerUpKind::Ghost => PURPLE,
            PowerUpKind::DoublePoints => MAGENTA,
            PowerUpKind::Shrink => ORANGE,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PowerUpKind::Speed => ">>",
            PowerUpKind::Slow => "<<",
            PowerUpKind::Ghost => "G",
            PowerUpKind::DoublePoints => "x2",
            PowerUpKind::Shrink => "--",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub cell: Cell,
    pub kind: PowerUpKind,
    pub spawned_at: f64,
}

impl PowerUp {
    pub fn is_expired(&self, now: f64) -> bool {
        now - self.spawned_at > POWER_UP_LIFETIME
    }
}

/// Live power-ups plus the timer that decides when the next one appears.
#[derive(Debug, Default)]
pub struct PowerUpRegistry {
    items: Vec<PowerUp>,
    last_spawn: Option<f64>,
    next_delay: f64,
}

impl PowerUpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the registry with existing power-ups; the next spawn is due
    /// no sooner than [`SPAWN_DELAY_MAX`] after `last_spawn`.
    #[cfg(test)]
    pub(crate) fn with_items(items: Vec<PowerUp>, last_spawn: f64) -> Self {
        Self { items, last_spawn: Some(last_spawn), next_delay: SPAWN_DELAY_MAX as f64 }
    }

    pub fn items(&self) -> &[PowerUp] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.items.iter().any(|p| p.cell == cell)
    }

    /// Places at most one power-up once the current delay has elapsed.
    ///
    /// The first call only starts the timer. Each spawn rolls a fresh delay
    /// between [`SPAWN_DELAY_MIN`] and [`SPAWN_DELAY_MAX`] seconds.
    pub fn try_spawn<R: RandomSource + ?Sized>(
        &mut self,
        now: f64,
        occupied: &[Cell],
        food: Cell,
        rng: &mut R,
    ) -> Option<&PowerUp> {
        let Some(last) = self.last_spawn else {
            self.restart_timer(now, rng);
            return None;
        };
        if now - last <= self.next_delay {
            return None;
        }

        let kind = PowerUpKind::ALL[rng.index(PowerUpKind::ALL.len())];
        let cell = rng::pick_free_cell(rng, |c| {
            c == food || occupied.contains(&c) || self.occupies(c)
        });
        self.restart_timer(now, rng);

        let cell = cell?;
        debug!("spawned {:?} at ({}, {})", kind, cell.x, cell.y);
        self.items.push(PowerUp { cell, kind, spawned_at: now });
        self.items.last()
    }

    /// Drops power-ups older than their lifetime. Returns how many went.
    pub fn expire_and_remove(&mut self, now: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|p| !p.is_expired(now));
        before - self.items.len()
    }

    pub fn consume_at(&mut self, cell: Cell) -> Option<PowerUpKind> {
        let idx = self.items.iter().position(|p| p.cell == cell)?;
        Some(self.items.remove(idx).kind)
    }

    fn restart_timer<R: RandomSource + ?Sized>(&mut self, now: f64, rng: &mut R) {
        self.last_spawn = Some(now);
        self.next_delay = rng.range_f32(SPAWN_DELAY_MIN, SPAWN_DELAY_MAX) as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays queued integers, then falls back to the low end of each range.
    struct Scripted(VecDeque<i32>);

    impl RandomSource for Scripted {
        fn range_i32(&mut self, low: i32, _high: i32) -> i32 {
            self.0.pop_front().unwrap_or(low)
        }

        fn range_f32(&mut self, low: f32, _high: f32) -> f32 {
            low
        }
    }

    fn registry_with(items: Vec<PowerUp>) -> PowerUpRegistry {
        PowerUpRegistry { items, last_spawn: Some(0.0), next_delay: 10.0 }
    }

    #[test]
    fn first_call_starts_timer_without_spawning() {
        let mut reg = PowerUpRegistry::new();
        let mut rng = Scripted(VecDeque::new());
        assert!(reg.try_spawn(0.0, &[], Cell::new(1, 1), &mut rng).is_none());
        assert!(reg.try_spawn(10.0, &[], Cell::new(1, 1), &mut rng).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn spawns_after_delay_and_restarts_timer() {
        let mut reg = PowerUpRegistry::new();
        let mut rng = Scripted(VecDeque::from([2, 7, 3]));
        reg.try_spawn(0.0, &[], Cell::new(1, 1), &mut rng);

        let spawned = reg.try_spawn(10.5, &[], Cell::new(1, 1), &mut rng).copied();
        let spawned = spawned.expect("delay elapsed");
        assert_eq!(spawned.kind, PowerUpKind::Ghost);
        assert_eq!(spawned.cell, Cell::new(7, 3));
        assert_eq!(spawned.spawned_at, 10.5);

        assert!(reg.try_spawn(15.0, &[], Cell::new(1, 1), &mut rng).is_none());
        assert_eq!(reg.len(), 1);
    }

    /// Always rolls the longest possible delay.
    struct Longest;

    impl RandomSource for Longest {
        fn range_i32(&mut self, low: i32, _high: i32) -> i32 {
            low
        }

        fn range_f32(&mut self, _low: f32, high: f32) -> f32 {
            high
        }
    }

    #[test]
    fn longest_delay_is_capped_at_twenty_seconds() {
        let mut reg = PowerUpRegistry::new();
        reg.try_spawn(0.0, &[], Cell::new(1, 1), &mut Longest);

        assert!(reg.try_spawn(SPAWN_DELAY_MAX as f64, &[], Cell::new(1, 1), &mut Longest).is_none());
        let spawned = reg.try_spawn(20.01, &[], Cell::new(1, 1), &mut Longest).copied();
        assert_eq!(spawned.map(|p| p.spawned_at), Some(20.01));
    }

    #[test]
    fn seeded_delays_fall_between_ten_and_twenty_seconds() {
        for seed in 0..20 {
            let mut reg = PowerUpRegistry::new();
            let mut rng = crate::rng::SeededRng::seeded(seed);
            reg.try_spawn(0.0, &[], Cell::new(1, 1), &mut rng);

            let first = (1..=250)
                .map(|step| step as f64 * 0.1)
                .find(|&now| reg.try_spawn(now, &[], Cell::new(1, 1), &mut rng).is_some());
            let first = first.expect("spawned within 25 s");
            assert!(first > SPAWN_DELAY_MIN as f64, "seed {seed} spawned at {first}");
            assert!(first <= SPAWN_DELAY_MAX as f64 + 0.1, "seed {seed} spawned at {first}");
        }
    }

    #[test]
    fn spawn_avoids_snake_food_and_other_power_ups() {
        let mut reg = registry_with(vec![PowerUp {
            cell: Cell::new(2, 0),
            kind: PowerUpKind::Slow,
            spawned_at: 0.0,
        }]);
        // kind, then three blocked draws, then a free one.
        let mut rng = Scripted(VecDeque::from([0, 0, 0, 1, 0, 2, 0, 3, 0]));
        let snake = [Cell::new(0, 0)];
        let food = Cell::new(1, 0);

        let spawned = reg.try_spawn(11.0, &snake, food, &mut rng).copied();
        assert_eq!(spawned.map(|p| p.cell), Some(Cell::new(3, 0)));
    }

    #[test]
    fn expiry_boundary() {
        let mut reg = registry_with(vec![PowerUp {
            cell: Cell::new(4, 4),
            kind: PowerUpKind::Speed,
            spawned_at: 100.0,
        }]);
        assert_eq!(reg.expire_and_remove(100.0 + POWER_UP_LIFETIME), 0);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.expire_and_remove(100.0 + POWER_UP_LIFETIME + 0.001), 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn consume_matches_exact_cell() {
        let mut reg = registry_with(vec![
            PowerUp { cell: Cell::new(4, 4), kind: PowerUpKind::Shrink, spawned_at: 0.0 },
            PowerUp { cell: Cell::new(8, 2), kind: PowerUpKind::DoublePoints, spawned_at: 0.0 },
        ]);
        assert_eq!(reg.consume_at(Cell::new(4, 5)), None);
        assert_eq!(reg.consume_at(Cell::new(8, 2)), Some(PowerUpKind::DoublePoints));
        assert_eq!(reg.consume_at(Cell::new(8, 2)), None);
        assert_eq!(reg.len(), 1);
    }
}
