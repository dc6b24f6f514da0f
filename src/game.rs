use std::collections::VecDeque;

use log::{debug, info, warn};
use macroquad::prelude::{Color, RED};

use crate::food::Food;
use crate::grid::{Cell, Direction};
use crate::particles::{Particle, ParticleSystem};
use crate::powerup::{PowerUp, PowerUpRegistry};
use crate::rng::RandomSource;
use crate::snake::{Modifiers, MoveResult, Snake};

pub const DEFAULT_TICK_RATE: f32 = 10.0;
pub const FOOD_POINTS: u32 = 10;
pub const FOOD_BURST: usize = 20;
pub const POWER_UP_BURST: usize = 25;
const FOOD_COLOR: Color = RED;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Read-only view of the game handed to the renderer after each tick.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub status: GameStatus,
    pub score: u32,
    pub tick_rate: f32,
    pub snake: &'a [Cell],
    pub trail: &'a VecDeque<Cell>,
    pub modifiers: Modifiers,
    pub food: Cell,
    pub power_ups: &'a [PowerUp],
    pub particles: &'a [Particle],
}

pub struct Game<R> {
    snake: Snake,
    food: Food,
    power_ups: PowerUpRegistry,
    particles: ParticleSystem,
    score: u32,
    status: GameStatus,
    pending_direction: Option<Direction>,
    base_rate: f32,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    pub fn new(base_rate: f32, mut rng: R) -> Self {
        let snake = Snake::new(Cell::center(), Direction::Right);
        let food = Food::spawn(snake.segments(), &mut rng);
        Self {
            snake,
            food,
            power_ups: PowerUpRegistry::new(),
            particles: ParticleSystem::new(),
            score: 0,
            status: GameStatus::Playing,
            pending_direction: None,
            base_rate,
            rng,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.cell()
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        self.power_ups.items()
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    /// Ticks per second the outer loop should drive at right now.
    pub fn tick_rate(&self) -> f32 {
        self.base_rate * self.snake.speed_factor()
    }

    /// Buffers a direction for the next tick. The latest call wins.
    pub fn on_input(&mut self, dir: Direction) {
        self.pending_direction = Some(dir);
    }

    pub fn tick(&mut self, now: f64) -> Snapshot<'_> {
        if self.status == GameStatus::Playing {
            self.advance(now);
        }
        self.snapshot()
    }

    pub fn restart(&mut self) {
        info!("restarting (previous score {})", self.score);
        self.snake = Snake::new(Cell::center(), Direction::Right);
        self.food = Food::spawn(self.snake.segments(), &mut self.rng);
        self.power_ups = PowerUpRegistry::new();
        self.particles.clear();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.pending_direction = None;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            status: self.status,
            score: self.score,
            tick_rate: self.tick_rate(),
            snake: self.snake.segments(),
            trail: self.snake.trail(),
            modifiers: self.snake.modifiers(),
            food: self.food.cell(),
            power_ups: self.power_ups.items(),
            particles: self.particles.particles(),
        }
    }

    fn advance(&mut self, now: f64) {
        if let Some(dir) = self.pending_direction.take() {
            self.snake.change_direction(dir);
        }

        if self.snake.step() == MoveResult::Collided {
            info!("game over with score {}", self.score);
            self.status = GameStatus::GameOver;
            return;
        }
        self.snake.tick_modifiers(now);

        let head = self.snake.head();
        if head == self.food.cell() {
            self.eat_food();
        }

        if let Some(kind) = self.power_ups.consume_at(head) {
            debug!("picked up {:?}", kind);
            self.snake.apply_power_up(kind, now);
            self.particles
                .emit(head.pixel_center(), kind.color(), POWER_UP_BURST, &mut self.rng);
        }
        self.power_ups.expire_and_remove(now);

        self.power_ups
            .try_spawn(now, self.snake.segments(), self.food.cell(), &mut self.rng);

        self.particles.tick();
    }

    fn eat_food(&mut self) {
        self.snake.grow();

        let points = if self.snake.has_double_points() { FOOD_POINTS * 2 } else { FOOD_POINTS };
        self.score += points;

        let at = self.food.cell().pixel_center();
        self.particles.emit(at, FOOD_COLOR, FOOD_BURST, &mut self.rng);

        if !self.food.respawn(self.snake.segments(), &mut self.rng) {
            warn!("no room left for food");
        }
    }
}
