//! Grid snake with timed power-ups and particle bursts.
//!
//! The simulation (`snake`, `food`, `powerup`, `particles`, `game`) never
//! reads the clock or a global RNG on its own: time comes in through
//! [`game::Game::tick`] and randomness through [`rng::RandomSource`].

pub mod app;
pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod pacing;
pub mod particles;
pub mod powerup;
pub mod render;
pub mod rng;
pub mod snake;
